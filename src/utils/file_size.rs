pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Sizes in the file table are always kilobytes with one decimal.
    pub fn format_kb(size: u64) -> String {
        format!("{:.1} KB", size as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::FileSizeUtils;

    #[test]
    fn formats_kilobytes_with_one_decimal() {
        assert_eq!(FileSizeUtils::format_kb(1024), "1.0 KB");
        assert_eq!(FileSizeUtils::format_kb(2048), "2.0 KB");
        assert_eq!(FileSizeUtils::format_kb(1536), "1.5 KB");
        assert_eq!(FileSizeUtils::format_kb(0), "0.0 KB");
    }

    #[test]
    fn large_files_stay_in_kilobytes() {
        assert_eq!(FileSizeUtils::format_kb(10 * 1024 * 1024), "10240.0 KB");
    }
}
