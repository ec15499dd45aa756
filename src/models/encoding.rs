//! # 文件编码
//!
//! 写入文件时使用的文本编码，作为显式配置项传递，不使用进程级默认值。
//!
//! ## 依赖关系
//! - 被 `system/fs.rs`, `sinks/file.rs`, `cli/` 使用

use crate::error::BatcherError;
use std::str::FromStr;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// 文本编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl FileEncoding {
    /// 文件开头的字节序标记
    pub fn preamble(self) -> &'static [u8] {
        match self {
            FileEncoding::Utf8 => &[],
            FileEncoding::Utf8Bom => &UTF8_BOM,
            FileEncoding::Utf16Le => &UTF16_LE_BOM,
            FileEncoding::Utf16Be => &UTF16_BE_BOM,
        }
    }

    /// 编码文本（不含字节序标记）
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            FileEncoding::Utf8 | FileEncoding::Utf8Bom => text.as_bytes().to_vec(),
            FileEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            FileEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }
}

impl FromStr for FileEncoding {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(FileEncoding::Utf8),
            "utf-8-bom" | "utf8bom" => Ok(FileEncoding::Utf8Bom),
            "utf-16" | "utf16" | "utf-16le" | "unicode" => Ok(FileEncoding::Utf16Le),
            "utf-16be" | "bigendianunicode" => Ok(FileEncoding::Utf16Be),
            _ => Err(BatcherError::InvalidArgument(format!("unsupported encoding '{}'", s))),
        }
    }
}

/// 按字节序标记解码文件内容，无标记时按 UTF-8 处理
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return String::from_utf8(rest.to_vec()).ok();
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    String::from_utf8(bytes.to_vec()).ok()
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_utf16() {
        assert_eq!(FileEncoding::Utf16Le.encode("A"), vec![0x41, 0x00]);
        assert_eq!(FileEncoding::Utf16Be.encode("A"), vec![0x00, 0x41]);
    }

    #[test]
    fn test_decode_with_preamble() {
        for encoding in [
            FileEncoding::Utf8,
            FileEncoding::Utf8Bom,
            FileEncoding::Utf16Le,
            FileEncoding::Utf16Be,
        ] {
            let mut bytes = encoding.preamble().to_vec();
            bytes.extend(encoding.encode("1.0.1|Sundew.Base\n"));
            assert_eq!(decode_text(&bytes).as_deref(), Some("1.0.1|Sundew.Base\n"));
        }
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8".parse::<FileEncoding>().unwrap(), FileEncoding::Utf8);
        assert_eq!("unicode".parse::<FileEncoding>().unwrap(), FileEncoding::Utf16Le);
        assert!("latin1".parse::<FileEncoding>().is_err());
    }
}
