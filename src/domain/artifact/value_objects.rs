//! Artifact Context - Value Objects

use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::ArtifactError;

/// 音频产物文件名
///
/// 不变量:
/// - 单一路径段：不含 `/`、`\`、`..`、NUL，且非空
/// - 只能解析到产物目录的直接子文件
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// 生成 `<uuid>.<extension>` 形式的新文件名
    pub fn generate(extension: &str) -> Self {
        Self(format!("{}.{}", Uuid::new_v4(), extension))
    }

    /// 校验外部传入的文件名
    pub fn parse(raw: &str) -> Result<Self, ArtifactError> {
        let rejected = raw.is_empty()
            || raw.contains('/')
            || raw.contains('\\')
            || raw.contains('\0')
            || raw.contains("..");

        if rejected {
            return Err(ArtifactError::PathTraversal(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.0).extension().and_then(|e| e.to_str())
    }

    /// 产物在目录中的完整路径
    pub fn resolve_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl std::fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_uuid_stem_and_extension() {
        let name = ArtifactName::generate("wav");
        let stem = name.as_str().strip_suffix(".wav").unwrap();
        assert!(Uuid::parse_str(stem).is_ok());
        assert_eq!(name.extension(), Some("wav"));
        assert_ne!(name, ArtifactName::generate("wav"));
    }

    #[test]
    fn test_parse_accepts_plain_file_name() {
        let name = ArtifactName::parse("3f2a.wav").unwrap();
        assert_eq!(name.as_str(), "3f2a.wav");
        assert_eq!(
            name.resolve_in(Path::new("data/audio")),
            PathBuf::from("data/audio/3f2a.wav")
        );
    }

    #[test]
    fn test_parse_rejects_traversal() {
        for raw in [
            "../../etc/passwd",
            "..",
            "a/b.wav",
            "a\\b.wav",
            "/etc/passwd",
            "x..wav",
            "",
            "bad\0.wav",
        ] {
            assert!(ArtifactName::parse(raw).is_err(), "accepted {:?}", raw);
        }
    }
}
