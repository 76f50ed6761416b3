//! AppMessage enum for async communication within the application.

/// Messages posted back to the event loop by background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The drawer transition with this generation has finished its delay
    DrawerSettled { generation: u64 },
}
