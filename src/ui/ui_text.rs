/// Every user-facing string in one place, so copy edits never touch layout
/// code.
pub struct UiText {
    pub app_title: &'static str,
    pub untitled: &'static str,
    pub new_seed_title: &'static str,
    pub back: &'static str,
    pub settings_gear: &'static str,
    pub done: &'static str,
    pub delete_title: &'static str,
    pub delete_message: &'static str,
    pub delete_confirm: &'static str,
    pub delete_cancel: &'static str,
    pub settings_title: &'static str,
    pub colors_section: &'static str,
    pub foreground_label: &'static str,
    pub background_label: &'static str,
    pub icon_section: &'static str,
    pub app_name_hint: &'static str,
    pub capacity_notice: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Seedboard",
    untitled: "Untitled App",
    new_seed_title: "New App Seed",
    back: "←",
    settings_gear: "⚙",
    done: "Done",
    delete_title: "Delete App Seed?",
    delete_message: "Are you sure you want to delete this app seed?",
    delete_confirm: "Delete",
    delete_cancel: "Cancel",
    settings_title: "Settings",
    colors_section: "Colors",
    foreground_label: "Foreground Color",
    background_label: "Background Color",
    icon_section: "Icon",
    app_name_hint: "App Name",
    capacity_notice: "The grid is full (27 app seeds max).",
};
