//! Artifact emission: renders templates and writes generated files.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::project::{CommandScaffold, Project};
use crate::template::{self, TemplateVars};
use crate::templates;

/// Generate `cmd/<name>.rs` for a new command and register it with its
/// parent by appending a module declaration to `cmd/mod.rs` when that file
/// exists. Refuses to overwrite an existing command file.
pub fn create_command(scaffold: &CommandScaffold, fs: &dyn FileSystem) -> Result<PathBuf> {
    let project = &scaffold.project;
    let target = project
        .absolute_path
        .join(format!("{}.rs", scaffold.cmd_name));

    if fs.exists(&target) {
        return Err(Error::generate_file_exists(target.to_string_lossy()));
    }

    fs.ensure_dir(&project.absolute_path)?;

    let use_name = scaffold.use_name();
    let content = template::render(
        templates::COMMAND_TEMPLATE,
        &[
            (TemplateVars::LICENSE_BANNER, &license_banner(project)),
            (TemplateVars::CMD_NAME, &scaffold.cmd_name),
            (TemplateVars::CMD_PARENT, &scaffold.cmd_parent),
            (TemplateVars::CMD_USE, &use_name),
        ],
    );

    write_generated(fs, &target, &content)?;
    register_module(fs, project, &scaffold.cmd_name)?;

    Ok(target)
}

/// Scaffold a fresh application: `main.rs`, `cmd/mod.rs`, `cmd/root.rs`,
/// and a `LICENSE` file when the configured license has a body. Run from
/// the directory the files should land in (a crate's `src/`).
pub fn init_project(project: &Project, fs: &dyn FileSystem) -> Result<Vec<PathBuf>> {
    let root_dir = project.absolute_path.parent().ok_or_else(|| {
        Error::internal_unexpected(format!(
            "Target directory has no parent: {}",
            project.absolute_path.display()
        ))
    })?;

    let main_path = root_dir.join("main.rs");
    let root_cmd_path = project.absolute_path.join("root.rs");
    for existing in [&main_path, &root_cmd_path] {
        if fs.exists(existing) {
            return Err(Error::generate_file_exists(existing.to_string_lossy()));
        }
    }

    fs.ensure_dir(&project.absolute_path)?;

    let banner = license_banner(project);
    let kebab_app = {
        use heck::ToKebabCase;
        project.app_name.to_kebab_case()
    };

    let mut written = Vec::new();

    let main_content = template::render(
        templates::MAIN_TEMPLATE,
        &[(TemplateVars::LICENSE_BANNER, &banner)],
    );
    write_generated(fs, &main_path, &main_content)?;
    written.push(main_path);

    let mod_path = project.absolute_path.join("mod.rs");
    let mod_content = template::render(
        templates::MOD_TEMPLATE,
        &[(TemplateVars::APP_NAME, project.app_name.as_str())],
    );
    write_generated(fs, &mod_path, &mod_content)?;
    written.push(mod_path);

    let root_content = template::render(
        templates::ROOT_TEMPLATE,
        &[
            (TemplateVars::LICENSE_BANNER, &banner),
            (TemplateVars::APP_NAME, &project.app_name),
            (TemplateVars::CMD_USE, &kebab_app),
        ],
    );
    write_generated(fs, &root_cmd_path, &root_content)?;
    written.push(root_cmd_path);

    if !project.legal.body.is_empty() {
        let license_path = root_dir.join("LICENSE");
        let license_content = template::render(
            project.legal.body,
            &[(TemplateVars::COPYRIGHT, project.copyright.as_str())],
        );
        write_generated(fs, &license_path, &license_content)?;
        written.push(license_path);
    }

    Ok(written)
}

fn license_banner(project: &Project) -> String {
    let header = template::render(
        project.legal.header,
        &[(TemplateVars::COPYRIGHT, project.copyright.as_str())],
    );
    let banner = template::comment_banner(&header);
    if banner.is_empty() {
        banner
    } else {
        format!("{}\n", banner)
    }
}

fn write_generated(fs: &dyn FileSystem, path: &PathBuf, content: &str) -> Result<()> {
    fs.write(path, content).map_err(|e| {
        Error::generate_write_failed(e.to_string(), Some(path.to_string_lossy().to_string()))
    })
}

/// Append `pub mod <name>;` to `cmd/mod.rs` when present and not already
/// declared. Absence of mod.rs is not an error; the wiring comment in the
/// generated file covers manual layouts.
fn register_module(fs: &dyn FileSystem, project: &Project, cmd_name: &str) -> Result<()> {
    let mod_path = project.absolute_path.join("mod.rs");
    if !fs.exists(&mod_path) {
        return Ok(());
    }

    let mut content = fs.read(&mod_path)?;
    let decl = format!("pub mod {};", cmd_name);
    if content.contains(&decl) {
        return Ok(());
    }

    if !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&decl);
    content.push('\n');

    fs.write(&mod_path, &content)
}
