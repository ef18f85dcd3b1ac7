mod delete;
mod list;
mod new;
mod open;

pub use delete::run_delete;
pub use list::run_list;
pub use new::run_new;
pub use open::run_open;

pub(super) const TOOL_NAME: &str = "upm-dev";
const HUMAN_HINT: &str = "Try: upm-dev root status";

pub(crate) fn emit_json_error(command: &str, code: &str, message: &str) -> anyhow::Result<()> {
    let wrapper = serde_json::json!({
        "tool": TOOL_NAME,
        "command": command,
        "ok": false,
        "error": {
            "code": code,
            "message": message,
            "hint": HUMAN_HINT,
        }
    });
    println!("{}", serde_json::to_string(&wrapper)?);
    Ok(())
}

pub(crate) fn emit_human_hint(context: &str, error: &anyhow::Error) {
    eprintln!("{context}: {error}");
    eprintln!("{HUMAN_HINT}");
}
