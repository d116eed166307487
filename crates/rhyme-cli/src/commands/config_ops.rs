use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", rhyme_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        rhyme_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: analysis.max_line_distance={}, color.palette={} colors, remote.batch_size={}",
        s.analysis.max_line_distance,
        s.color.palette.len(),
        s.remote.batch_size
    );
}
