use std::path::PathBuf;

use async_trait::async_trait;
use rackplan::{prelude::*, snapshot::Snapshot};

use crate::delivery::Delivery;

/// Autosaves the snapshot as a JSON draft.
pub struct DraftFile {
    pub path: PathBuf,
}

#[async_trait]
impl Delivery for DraftFile {
    fn name(&self) -> &'static str {
        "draft"
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn deliver(&self, snapshot: &Snapshot) -> Result {
        let contents = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("failed to write `{}`", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::tests::snapshot;

    #[tokio::test]
    async fn test_writes_json() {
        let directory = tempfile::tempdir().unwrap();
        let draft = DraftFile { path: directory.path().join("draft.json") };
        let snapshot = snapshot();
        draft.deliver(&snapshot).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&draft.path).unwrap()).unwrap();
        assert_eq!(written["configuration"]["racks_600_count"], 0);
        assert!(written["summary"]["items"].is_array());
    }

    #[tokio::test]
    async fn test_missing_directory_fails() {
        let directory = tempfile::tempdir().unwrap();
        let draft = DraftFile { path: directory.path().join("missing").join("draft.json") };
        assert!(draft.deliver(&snapshot()).await.is_err());
    }
}
