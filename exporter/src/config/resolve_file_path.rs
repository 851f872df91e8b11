use std::env;
use std::error::Error;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "DRIVE_SHEET_EXPORT_CONFIG";

fn not_found(message: String) -> Box<dyn Error> {
    Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, message))
}

fn resolve_command_line_arg(args: &[String]) -> Result<String, Box<dyn Error>> {
    let path = args
        .iter()
        .find_map(|arg| arg.strip_prefix("--config-file="))
        .filter(|path| !path.is_empty())
        .ok_or_else(|| not_found("No \"--config-file\" argument provided or path is empty".to_string()))?;

    resolve_path(path).map_err(|_| not_found(format!("Invalid path set by \"--config-file\" argument: {}", path)))
}

fn resolve_environment_var(variable_name: &str) -> Result<String, Box<dyn Error>> {
    let env_path = env::var(variable_name)
        .map_err(|_| not_found(format!("Environment variable {} is not set", variable_name)))?;

    resolve_path(&env_path).map_err(|_| not_found(format!("Invalid path set by {}: {:#?}", variable_name, env_path)))
}

/// Absolute paths are checked as is, relative ones against the current working directory.
pub fn resolve_path(path_string: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(path_string);
    let resolved_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    if !resolved_path.exists() {
        return Err(not_found(format!("Path does not exist {}", path_string)));
    }
    Ok(resolved_path.to_string_lossy().into_owned())
}

pub fn resolve_first_path(paths: &[&str]) -> Result<String, Box<dyn Error>> {
    paths
        .iter()
        .find_map(|path| resolve_path(path).ok())
        .ok_or_else(|| not_found(format!("No valid path found: {:#?}", paths)))
}

fn resolve_config_file_path_from(cmd_args: &[String], variable_name: &str, fallback_paths: &[&str]) -> Result<String, Box<dyn Error>> {
    resolve_command_line_arg(cmd_args)
        .or_else(|_| resolve_environment_var(variable_name))
        .or_else(|_| resolve_first_path(fallback_paths))
}

/// `--config-file=<path>` first, then `DRIVE_SHEET_EXPORT_CONFIG`, then the first existing fallback.
pub fn resolve_config_file_path(cmd_args: &[String], fallback_paths: &[&str]) -> Result<String, Box<dyn Error>> {
    resolve_config_file_path_from(cmd_args, CONFIG_ENV_VAR, fallback_paths)
}
