//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const COPYRIGHT: &'static str = "copyright";
    pub const LICENSE_BANNER: &'static str = "licenseBanner";
    pub const CMD_NAME: &'static str = "cmdName";
    pub const CMD_PARENT: &'static str = "cmdParent";
    pub const CMD_USE: &'static str = "cmdUse";
    pub const APP_NAME: &'static str = "appName";
    pub const PKG_NAME: &'static str = "pkgName";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

/// Turn license header text into a `//` comment banner. Empty text (the
/// `none` license) renders to nothing so templates collapse cleanly.
pub fn comment_banner(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut banner = String::new();
    for line in text.lines() {
        if line.is_empty() {
            banner.push_str("//\n");
        } else {
            banner.push_str("// ");
            banner.push_str(line);
            banner.push('\n');
        }
    }
    banner
}
