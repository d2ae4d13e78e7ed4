use std::fs;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::error;
use path_clean::PathClean;

use crate::utils::{CONFIG_FILE, CONFIG_PATH};

pub fn file_reader<R>(r: R) -> BufReader<R>
where
    R: Read,
{
    BufReader::with_capacity(131_072, r)
}

pub fn get_exe_path() -> PathBuf {
    let default_path = std::path::PathBuf::from("./");
    let current_exe = std::env::current_exe();
    match current_exe {
        Ok(exe) => {
            match fs::read_link(&exe) {
                Ok(f) => f.parent().map_or(default_path, std::path::Path::to_path_buf),
                Err(_) => exe.parent().map_or(default_path, std::path::Path::to_path_buf)
            }
        }
        Err(_) => default_path
    }
}

fn get_default_path(file: &str) -> String {
    let path: PathBuf = get_exe_path();
    let default_path = path.join(file);
    String::from(if default_path.exists() {
        default_path.to_str().unwrap_or(file)
    } else {
        file
    })
}

pub fn get_default_file_path(config_path: &str, file: &str) -> String {
    let path: PathBuf = PathBuf::from(config_path);
    let default_path = path.join(file);
    String::from(default_path.to_str().unwrap_or(file))
}

#[inline]
pub fn get_default_config_path() -> String {
    get_default_path(CONFIG_PATH)
}

#[inline]
pub fn get_default_config_file_path(config_path: &str) -> String {
    get_default_file_path(config_path, CONFIG_FILE)
}

pub fn get_working_path(wd: &str) -> String {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if wd.is_empty() {
        String::from(current_dir.to_str().unwrap_or("."))
    } else {
        let work_path = std::path::PathBuf::from(wd);
        let wdpath = fs::metadata(&work_path).map_or(None, |md| if md.is_dir() {
            work_path.canonicalize().ok()
        } else {
            error!("Path not found {:?}", &work_path);
            None
        });
        let rp: PathBuf = wdpath.map_or_else(|| current_dir.join(wd), |d| d);
        String::from(rp.clean().to_str().unwrap_or("./"))
    }
}

#[inline]
pub fn open_file(file_name: &Path) -> Result<File, std::io::Error> {
    File::open(file_name)
}

pub fn path_exists(file_path: &Path) -> bool {
    if let Ok(metadata) = fs::metadata(file_path) {
        return metadata.is_file();
    }
    false
}

/// Resolves a relative path against the working dir, absolute paths are only cleaned.
pub fn make_absolute_path(path: &str, working_dir: &str) -> PathBuf {
    let rpb = PathBuf::from(path);
    if rpb.is_relative() {
        PathBuf::from(working_dir).join(&rpb).clean()
    } else {
        rpb.clean()
    }
}
