#[macro_export]
macro_rules! bytes_from_relative_file {
    ($f : expr) => {{
        let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        std::fs::read(base.join($f)).unwrap()
    }};
}

#[macro_export]
macro_rules! lines_from_relative_file {
    ($f : expr) => {{
        use std::io::BufRead;
        let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let f = std::fs::File::open(base.join($f)).unwrap();
        std::io::BufReader::new(f).lines()
    }};
}
