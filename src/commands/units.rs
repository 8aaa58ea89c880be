//! `drift units` command.

use crate::context::ServiceContext;

/// Execute the `units` command.
///
/// Displays a table of the project's target units showing path, package
/// name, version, and dependency count.
///
/// # Errors
///
/// Returns an error string if the project model fails. (Listing itself is
/// infallible once the context is loaded.)
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let mut units = ctx.project.target_units();
    if units.is_empty() {
        println!("No units found in project.");
        return Ok(());
    }
    units.sort_by(|a, b| a.path.cmp(&b.path));

    let rows: Vec<(String, String, String, String)> = units
        .iter()
        .map(|u| {
            (u.path.clone(), u.name.clone(), u.version.clone(), u.dependencies.len().to_string())
        })
        .collect();

    let path_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(4).max(4);
    let name_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(4).max(4);
    let version_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(7).max(7);

    println!("{:<path_width$}  {:<name_width$}  {:<version_width$}  DEPS", "PATH", "NAME", "VERSION");
    println!("{:-<path_width$}  {:-<name_width$}  {:-<version_width$}  ----", "", "", "");
    for (path, name, version, deps) in &rows {
        println!("{path:<path_width$}  {name:<name_width$}  {version:<version_width$}  {deps}");
    }

    println!("\n{} unit(s) total.", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn units_command_lists_targets() {
        let dir = std::env::temp_dir().join("drift_cmd_units_list");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("drift.yaml"),
            "units:\n  - path: pkgs/app\n    name: app\n    version: \"1.0.0\"\n    dependencies:\n      - name: lib\n        version: \"1.0.0\"\n  - path: pkgs/lib\n    name: lib\n    version: \"1.0.0\"\n",
        )
        .unwrap();

        let ctx = ServiceContext::live(&dir).unwrap();
        assert!(run(&ctx).is_ok());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn units_command_handles_empty_project() {
        let dir = std::env::temp_dir().join("drift_cmd_units_empty");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("drift.yaml"), "units: []\n").unwrap();

        let ctx = ServiceContext::live(&dir).unwrap();
        assert!(run(&ctx).is_ok());

        let _ = fs::remove_dir_all(&dir);
    }
}
