use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkspaceLink {
    pub name: String,
    pub description: String,
    pub command: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DashboardResponse {
    pub workspaces: Vec<WorkspaceLink>,
    pub local_drafts: usize,
    pub pending_approvals: usize,
}
