pub mod branch_name;

/// Names that cannot be written as `<name>:<commit>` lines or that look like paths
/// traversing out of the branch namespace.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
