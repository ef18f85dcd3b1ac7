//! Caller-owned description of a package to scaffold.

/// Configuration for one package-creation run.
///
/// The value is assembled by the caller (CLI flags merged with config
/// defaults), checked by [`crate::validate`], and handed to
/// [`crate::scaffold::PackagesRoot::create_package`]. It carries no identity
/// beyond the invocation that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub package_name: String,
    /// Free-form; never rejected by validation.
    pub package_description: String,
    pub package_author: String,
    /// Only checked for non-emptiness; the address format is not validated.
    pub package_author_email: String,
    pub organization: String,
    pub create_tests: bool,
    pub create_editor: bool,
    pub create_default_script: bool,
    pub create_git_repo: bool,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            package_name: String::new(),
            package_description: String::new(),
            package_author: String::new(),
            package_author_email: String::new(),
            organization: String::new(),
            create_tests: true,
            create_editor: true,
            create_default_script: false,
            create_git_repo: true,
        }
    }
}
