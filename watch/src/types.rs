use std::path::PathBuf;

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::EventKind as NotifyKind;

/// What happened to a path, as delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Created,
    Written,
    Removed,
    Renamed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Written => "written",
            EventKind::Removed => "removed",
            EventKind::Renamed => "renamed",
        }
    }
}

/// One filesystem event that survived the ignore filter.
#[derive(Debug, Clone)]
pub struct WatchEvent {
    pub kind: EventKind,
    pub path: PathBuf,
}

/// Collapse notify's platform taxonomy to the four kinds vigil delivers.
/// Access and metadata-only changes are dropped here.
pub(crate) fn categorize(kind: &NotifyKind) -> Option<EventKind> {
    match kind {
        NotifyKind::Create(_) => Some(EventKind::Created),
        NotifyKind::Modify(ModifyKind::Name(_)) => Some(EventKind::Renamed),
        NotifyKind::Modify(ModifyKind::Metadata(_)) => None,
        NotifyKind::Modify(_) => Some(EventKind::Written),
        NotifyKind::Remove(_) => Some(EventKind::Removed),
        _ => None,
    }
}

/// Directory hint for the ignore engine, when the platform reported the
/// entry kind. Keeps stat off the delivery path for creates and removes.
pub(crate) fn dir_hint(kind: &NotifyKind) -> Option<bool> {
    match kind {
        NotifyKind::Create(CreateKind::Folder) | NotifyKind::Remove(RemoveKind::Folder) => {
            Some(true)
        }
        NotifyKind::Create(CreateKind::File) | NotifyKind::Remove(RemoveKind::File) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{DataChange, MetadataKind, RenameMode};

    #[test]
    fn create_and_remove_map_directly() {
        assert_eq!(
            categorize(&NotifyKind::Create(CreateKind::File)),
            Some(EventKind::Created)
        );
        assert_eq!(
            categorize(&NotifyKind::Remove(RemoveKind::Folder)),
            Some(EventKind::Removed)
        );
    }

    #[test]
    fn renames_are_not_writes() {
        assert_eq!(
            categorize(&NotifyKind::Modify(ModifyKind::Name(RenameMode::Both))),
            Some(EventKind::Renamed)
        );
        assert_eq!(
            categorize(&NotifyKind::Modify(ModifyKind::Data(DataChange::Content))),
            Some(EventKind::Written)
        );
    }

    #[test]
    fn metadata_and_access_are_dropped() {
        assert_eq!(
            categorize(&NotifyKind::Modify(ModifyKind::Metadata(MetadataKind::Any))),
            None
        );
        assert_eq!(categorize(&NotifyKind::Any), None);
    }

    #[test]
    fn hints_come_from_reported_entry_kinds() {
        assert_eq!(dir_hint(&NotifyKind::Create(CreateKind::Folder)), Some(true));
        assert_eq!(dir_hint(&NotifyKind::Remove(RemoveKind::File)), Some(false));
        assert_eq!(dir_hint(&NotifyKind::Create(CreateKind::Any)), None);
        assert_eq!(
            dir_hint(&NotifyKind::Modify(ModifyKind::Data(DataChange::Content))),
            None
        );
    }
}
