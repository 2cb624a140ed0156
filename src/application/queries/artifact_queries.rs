//! Artifact Queries - 音频产物查询

/// 获取产物文件查询
#[derive(Debug, Clone)]
pub struct GetArtifact {
    /// 下载请求中的原始文件名
    pub filename: String,
}
