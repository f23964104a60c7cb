//! Asset actions and the action menu

use std::fmt;

use serde::{Deserialize, Serialize};

/// Management actions offered on an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetAction {
    Mint,
    Burn,
    Transfer,
    Freeze,
    Unfreeze,
    Pause,
    Unpause,
    ManageRoles,
    EditKyc,
    IssueClaim,
}

impl AssetAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mint => "Mint",
            Self::Burn => "Burn",
            Self::Transfer => "Transfer",
            Self::Freeze => "Freeze",
            Self::Unfreeze => "Unfreeze",
            Self::Pause => "Pause",
            Self::Unpause => "Unpause",
            Self::ManageRoles => "Manage roles",
            Self::EditKyc => "Edit KYC",
            Self::IssueClaim => "Issue claim",
        }
    }

    /// Pause and unpause take no input and open straight on the confirm step
    pub fn has_values_step(&self) -> bool {
        !matches!(self, Self::Pause | Self::Unpause)
    }

    pub fn all() -> &'static [AssetAction] {
        &[
            Self::Mint,
            Self::Burn,
            Self::Transfer,
            Self::Freeze,
            Self::Unfreeze,
            Self::Pause,
            Self::Unpause,
            Self::ManageRoles,
            Self::EditKyc,
            Self::IssueClaim,
        ]
    }

    /// Menu entries for an asset; only one of pause/unpause applies at a time
    pub fn menu_items(is_paused: bool) -> Vec<AssetAction> {
        Self::all()
            .iter()
            .copied()
            .filter(|action| match action {
                Self::Pause => !is_paused,
                Self::Unpause => is_paused,
                _ => true,
            })
            .collect()
    }
}

impl fmt::Display for AssetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dropdown state: which action sheet, if any, is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionMenu {
    open: Option<AssetAction>,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a sheet, replacing whichever one was open
    pub fn open(&mut self, action: AssetAction) {
        tracing::debug!(action = %action, "opening action sheet");
        self.open = Some(action);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_action(&self) -> Option<AssetAction> {
        self.open
    }

    pub fn is_open(&self, action: AssetAction) -> bool {
        self.open == Some(action)
    }
}
