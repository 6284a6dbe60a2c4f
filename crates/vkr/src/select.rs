use crate::models::PostDownload;

/// Pick the variant to embed: the first download in resolver order whose
/// extension is exactly `mp4` and whose format id contains `hd`.
pub fn select_variant(downloads: &[PostDownload]) -> Option<&PostDownload> {
    downloads
        .iter()
        .find(|d| d.ext == "mp4" && d.format_id.contains("hd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download(url: &str, format_id: &str, ext: &str) -> PostDownload {
        PostDownload {
            url: url.to_string(),
            format_id: format_id.to_string(),
            ext: ext.to_string(),
        }
    }

    #[test]
    fn test_empty_returns_none() {
        assert!(select_variant(&[]).is_none());
    }

    #[test]
    fn test_first_matching_wins() {
        let downloads = vec![
            download("https://cdn/a.mp4", "hd-720", "mp4"),
            download("https://cdn/b.mp4", "hd-1080", "mp4"),
        ];
        assert_eq!(select_variant(&downloads).unwrap().url, "https://cdn/a.mp4");
    }

    #[test]
    fn test_earlier_non_matching_is_skipped() {
        let downloads = vec![
            download("https://cdn/audio.m4a", "hd-audio", "m4a"),
            download("https://cdn/sd.mp4", "sd-360", "mp4"),
            download("https://cdn/hd.mp4", "hd-720", "mp4"),
        ];
        assert_eq!(
            select_variant(&downloads).unwrap().url,
            "https://cdn/hd.mp4"
        );
    }

    #[test]
    fn test_format_id_is_substring_match() {
        let downloads = vec![download("https://cdn/x.mp4", "dash_hd_v2", "mp4")];
        assert!(select_variant(&downloads).is_some());
    }

    #[test]
    fn test_ext_match_is_exact() {
        let downloads = vec![
            download("https://cdn/x.mp42", "hd-720", "mp42"),
            download("https://cdn/y.mkv", "hd-720", "mkv"),
            download("https://cdn/z.mp4", "hd-720", "MP4"),
        ];
        assert!(select_variant(&downloads).is_none());
    }

    #[test]
    fn test_format_id_match_is_case_sensitive() {
        let downloads = vec![download("https://cdn/x.mp4", "HD-720", "mp4")];
        assert!(select_variant(&downloads).is_none());
    }

    #[test]
    fn test_no_qualifying_variant_returns_none() {
        let downloads = vec![
            download("https://cdn/sd.mp4", "sd-360", "mp4"),
            download("https://cdn/hd.webm", "hd-720", "webm"),
        ];
        assert!(select_variant(&downloads).is_none());
    }
}
