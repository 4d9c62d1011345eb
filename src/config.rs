/// Project metadata shown by the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PROJECT_NAME: &str = "eyecore-test-app";
pub const PROJECT_DESCRIPTION: &str = "Testing EyeCore Python SDK functionality";

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: PROJECT_NAME,
            description: PROJECT_DESCRIPTION,
        }
    }
}
