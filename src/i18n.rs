pub trait UiStrings {
    fn nav_home(&self) -> &'static str;
    fn nav_translate(&self) -> &'static str;
    fn nav_about(&self) -> &'static str;
    fn nav_contact(&self) -> &'static str;
    fn picker_title(&self) -> &'static str;
    fn languages_title(&self) -> &'static str;
    fn supers_title(&self) -> &'static str;
    fn submit_label(&self) -> &'static str;
    fn download_label(&self) -> &'static str;
    fn footer_hint(&self) -> &'static str;
    fn lang_toggle_hint(&self) -> &'static str;
}

pub struct English;
impl UiStrings for English {
    fn nav_home(&self) -> &'static str { "Home" }
    fn nav_translate(&self) -> &'static str { "Translate" }
    fn nav_about(&self) -> &'static str { "About" }
    fn nav_contact(&self) -> &'static str { "Contact" }
    fn picker_title(&self) -> &'static str { "Choose a video file (mp4, mov, avi)" }
    fn languages_title(&self) -> &'static str { "Choose Target Languages" }
    fn supers_title(&self) -> &'static str { "Supers Customization" }
    fn submit_label(&self) -> &'static str { "Start Translation" }
    fn download_label(&self) -> &'static str { "Download Translated Video" }
    fn footer_hint(&self) -> &'static str { "←/→ pages · Tab sections · Ctrl+Q quit" }
    fn lang_toggle_hint(&self) -> &'static str { "Ctrl+L: हिन्दी" }
}

pub struct Hindi;
impl UiStrings for Hindi {
    fn nav_home(&self) -> &'static str { "होम" }
    fn nav_translate(&self) -> &'static str { "अनुवाद" }
    fn nav_about(&self) -> &'static str { "परिचय" }
    fn nav_contact(&self) -> &'static str { "संपर्क" }
    fn picker_title(&self) -> &'static str { "वीडियो फ़ाइल चुनें (mp4, mov, avi)" }
    fn languages_title(&self) -> &'static str { "लक्ष्य भाषाएँ चुनें" }
    fn supers_title(&self) -> &'static str { "सुपर्स अनुकूलन" }
    fn submit_label(&self) -> &'static str { "अनुवाद शुरू करें" }
    fn download_label(&self) -> &'static str { "अनुवादित वीडियो डाउनलोड करें" }
    fn footer_hint(&self) -> &'static str { "←/→ पृष्ठ · Tab खंड · Ctrl+Q बाहर" }
    fn lang_toggle_hint(&self) -> &'static str { "Ctrl+L: English" }
}
