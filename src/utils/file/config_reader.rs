use std::env;
use std::io::Read;
use std::path::PathBuf;

use crate::model::Config;
use crate::tunescout_error::{create_tunescout_error_result, TuneScoutError, TuneScoutErrorKind};
use crate::utils::CONSTANTS;
use crate::utils::file::file_utils;

pub fn read_config(config_path: &str, config_file: &str) -> Result<Config, TuneScoutError> {
    let path = PathBuf::from(config_file);
    let mut config = if file_utils::path_exists(&path) {
        match file_utils::open_file(&path) {
            Ok(file) => {
                let mut content = String::new();
                if let Err(err) = file_utils::file_reader(file).read_to_string(&mut content) {
                    return create_tunescout_error_result!(TuneScoutErrorKind::Info, "cant read config file: {}", err);
                }
                match serde_yaml::from_str::<Config>(&resolve_env_var(&content)) {
                    Ok(result) => result,
                    Err(e) => return create_tunescout_error_result!(TuneScoutErrorKind::Info, "cant read config file: {}", e),
                }
            }
            Err(err) => return create_tunescout_error_result!(TuneScoutErrorKind::Info, "cant open config file {}: {}", config_file, err),
        }
    } else {
        Config::default()
    };
    config.t_config_path = config_path.to_string();
    config.t_config_file_path = config_file.to_string();
    config.prepare()?;
    Ok(config)
}

pub fn resolve_env_var(value: &str) -> String {
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| format!("${{env:{var_name}}}"))
    }).to_string()
}
