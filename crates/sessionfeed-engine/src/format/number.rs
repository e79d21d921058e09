const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// "42%" for integral values, "42.5%" otherwise
pub fn percent_label(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 {
        format!("{}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Human-readable byte size: "500 B", "2.0 KB", "1.5 MB", "3.0 GB"
pub fn file_size(bytes: f64) -> String {
    if !bytes.is_finite() {
        String::new()
    } else if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes / KIB)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes / MIB)
    } else {
        format!("{:.1} GB", bytes / GIB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(42.0), "42%");
        assert_eq!(percent_label(42.5), "42.5%");
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(33.333), "33.3%");
        assert_eq!(percent_label(f64::NAN), "");
    }

    #[test]
    fn test_file_size_thresholds() {
        assert_eq!(file_size(500.0), "500 B");
        assert_eq!(file_size(1023.0), "1023 B");
        assert_eq!(file_size(1024.0), "1.0 KB");
        assert_eq!(file_size(2048.0), "2.0 KB");
        assert_eq!(file_size(1536.0 * 1024.0), "1.5 MB");
        assert_eq!(file_size(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0 GB");
        assert_eq!(file_size(f64::INFINITY), "");
    }
}
