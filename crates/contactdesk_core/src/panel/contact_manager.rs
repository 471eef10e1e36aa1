//! Contact manager panel: tag filter, saved lists, contact edits.
//!
//! # Responsibility
//! - Hold the session cache, the saved-list mapping and the active filter.
//! - Handle one [`ContactAction`] at a time and describe the outcome.
//!
//! # Invariants
//! - The filtered view is recomputed from the cached table on every action.
//! - Member references are resolved before any write; one bad reference
//!   rejects the whole action.

use crate::panel::{DeskError, PanelResponse};
use crate::repo::contact_repo::ContactRepository;
use crate::repo::list_repo::SavedListRepository;
use crate::service::contact_service::ContactServiceError;
use crate::service::list_service::{ListServiceError, SavedListService};
use crate::session::Session;
use crate::tags::extract::normalize_tag;
use crate::tags::filter::{contact_matches, FilterMode};
use log::{info, warn};

/// Reference to a contact picked by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberRef {
    /// Table position, as shown in contact listings.
    Index(usize),
    /// Display name taken verbatim.
    Name(String),
}

impl MemberRef {
    /// Parses `#3` as an index; anything else, bare numbers included, is a name.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().strip_prefix('#').map(str::parse::<usize>) {
            Some(Ok(index)) => Self::Index(index),
            _ => Self::Name(raw.to_string()),
        }
    }
}

/// Operator actions of the contact manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Show the cached tag set.
    Tags,
    /// Set the active filter; empty `tags` clears it.
    Filter { tags: Vec<String>, mode: FilterMode },
    /// Show the contacts of the current view.
    Contacts,
    ListNames,
    ShowList { name: String },
    /// Create or silently overwrite a saved list.
    SaveList { name: String, members: Vec<MemberRef> },
    UpdateList { name: String, members: Vec<MemberRef> },
    DeleteList { name: String },
    RenameContact { index: usize, name: String },
    /// Positional rename of the whole table.
    RenameAll { names: Vec<String> },
    AddContact { raw_name: String },
    /// Re-read the contact file and refresh the tag set.
    Reload,
}

/// Contact manager state for one session.
pub struct ContactManager<C: ContactRepository, L: SavedListRepository> {
    session: Session<C>,
    lists: SavedListService<L>,
    filter_tags: Vec<String>,
    filter_mode: FilterMode,
}

impl<C: ContactRepository, L: SavedListRepository> ContactManager<C, L> {
    /// Loads contacts and saved lists; either failure is fatal.
    pub fn open(contacts: C, lists: L) -> Result<Self, DeskError> {
        Ok(Self {
            session: Session::open(contacts)?,
            lists: SavedListService::load(lists)?,
            filter_tags: Vec::new(),
            filter_mode: FilterMode::default(),
        })
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    pub fn saved_lists(&self) -> &SavedListService<L> {
        &self.lists
    }

    /// Active filter as `(tags, mode)`.
    pub fn filter(&self) -> (&[String], FilterMode) {
        (&self.filter_tags, self.filter_mode)
    }

    /// Performs `action` and reports the outcome.
    pub fn handle(&mut self, action: ContactAction) -> PanelResponse {
        match action {
            ContactAction::Tags => self.show_tags(),
            ContactAction::Filter { tags, mode } => self.set_filter(tags, mode),
            ContactAction::Contacts => self.show_view(),
            ContactAction::ListNames => self.show_list_names(),
            ContactAction::ShowList { name } => self.show_list(&name),
            ContactAction::SaveList { name, members } => self.save_list(&name, &members),
            ContactAction::UpdateList { name, members } => self.update_list(&name, &members),
            ContactAction::DeleteList { name } => self.delete_list(&name),
            ContactAction::RenameContact { index, name } => {
                let result = self.session.rename_one(index, name);
                contact_edit_response(result, "Contact renamed and saved.")
            }
            ContactAction::RenameAll { names } => {
                let result = self.session.rename_all(names);
                contact_edit_response(result, "Contacts updated and saved.")
            }
            ContactAction::AddContact { raw_name } => self.add_contact(&raw_name),
            ContactAction::Reload => match self.session.reload() {
                Ok(()) => PanelResponse::success(format!(
                    "Reloaded {} contacts, {} tags.",
                    self.session.table().len(),
                    self.session.tags().len()
                )),
                Err(err) => PanelResponse::error(format!("Reload failed: {err}")),
            },
        }
    }

    fn show_tags(&self) -> PanelResponse {
        let tags = self.session.tags();
        let message = if self.session.tags_stale() {
            format!(
                "{} tags (reload to include recently added contacts)",
                tags.len()
            )
        } else {
            format!("{} tags", tags.len())
        };
        PanelResponse::info(message).with_lines(tags.to_vec())
    }

    fn set_filter(&mut self, tags: Vec<String>, mode: FilterMode) -> PanelResponse {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags.iter().filter_map(|tag| normalize_tag(tag)) {
            if !normalized.contains(&tag) {
                normalized.push(tag);
            }
        }
        self.filter_tags = normalized;
        self.filter_mode = mode;
        info!(
            "event=filter_set module=panel status=ok tags={} mode={}",
            self.filter_tags.len(),
            mode
        );
        self.show_view()
    }

    fn show_view(&self) -> PanelResponse {
        let table = self.session.table();
        let lines: Vec<String> = table
            .contacts()
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact_matches(contact, &self.filter_tags, self.filter_mode))
            .map(|(index, contact)| format!("#{index} {}", contact.display_name))
            .collect();

        let message = if self.filter_tags.is_empty() {
            format!("{} contacts", table.len())
        } else {
            format!(
                "{} of {} contacts match {} of [{}]",
                lines.len(),
                table.len(),
                self.filter_mode,
                self.filter_tags.join(", ")
            )
        };
        PanelResponse::info(message).with_lines(lines)
    }

    fn show_list_names(&self) -> PanelResponse {
        let lines = self
            .lists
            .lists()
            .iter()
            .map(|(name, members)| format!("{name} ({})", members.len()))
            .collect();
        PanelResponse::info(format!("{} saved lists", self.lists.lists().len()))
            .with_lines(lines)
    }

    fn show_list(&self, name: &str) -> PanelResponse {
        match self.lists.get(name) {
            Some(members) => {
                PanelResponse::info(format!("Contacts in '{name}'")).with_lines(members.to_vec())
            }
            None => {
                let err = ListServiceError::ListNotFound(name.to_string());
                PanelResponse::error(err.to_string())
            }
        }
    }

    fn save_list(&mut self, name: &str, members: &[MemberRef]) -> PanelResponse {
        let members = match self.resolve_members(members) {
            Ok(members) => members,
            Err(response) => return response,
        };
        let count = members.len();
        match self.lists.create_or_overwrite(name, members) {
            Ok(true) => {
                PanelResponse::success(format!("Saved list '{name}' with {count} contacts."))
            }
            Ok(false) => {
                PanelResponse::error("A list name and at least one contact are required.")
            }
            Err(err) => PanelResponse::error(format!("Could not save list: {err}")),
        }
    }

    fn update_list(&mut self, name: &str, members: &[MemberRef]) -> PanelResponse {
        let members = match self.resolve_members(members) {
            Ok(members) => members,
            Err(response) => return response,
        };
        match self.lists.update(name, members) {
            Ok(()) => PanelResponse::success("List updated."),
            Err(err) => PanelResponse::error(format!("Could not update list: {err}")),
        }
    }

    fn delete_list(&mut self, name: &str) -> PanelResponse {
        match self.lists.delete(name) {
            Ok(()) => PanelResponse::warning(format!("Deleted list: {name}")),
            Err(err) => PanelResponse::error(format!("Could not delete list: {err}")),
        }
    }

    fn add_contact(&mut self, raw_name: &str) -> PanelResponse {
        match self.session.append(raw_name) {
            Ok(true) => {
                PanelResponse::success("Contact added. Reload to see its tags in the tag list.")
            }
            Ok(false) => PanelResponse::error("Contact name cannot be blank."),
            Err(err) => PanelResponse::error(format!("Could not add contact: {err}")),
        }
    }

    fn resolve_members(&self, members: &[MemberRef]) -> Result<Vec<String>, PanelResponse> {
        let contacts = self.session.table().contacts();
        members
            .iter()
            .map(|member| match member {
                MemberRef::Name(name) => Ok(name.clone()),
                MemberRef::Index(index) => contacts
                    .get(*index)
                    .map(|contact| contact.display_name.clone())
                    .ok_or_else(|| {
                        warn!(
                            "event=member_resolve module=panel status=error index={} rows={}",
                            index,
                            contacts.len()
                        );
                        PanelResponse::error(format!(
                            "Contact #{index} does not exist; nothing was saved."
                        ))
                    }),
            })
            .collect()
    }
}

fn contact_edit_response(
    result: Result<(), ContactServiceError>,
    success: &str,
) -> PanelResponse {
    match result {
        Ok(()) => PanelResponse::success(success),
        Err(err) => PanelResponse::error(format!("Could not save contacts: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::MemberRef;

    #[test]
    fn member_ref_parses_hash_indices_and_names() {
        assert_eq!(MemberRef::parse("#3"), MemberRef::Index(3));
        assert_eq!(MemberRef::parse(" #12 "), MemberRef::Index(12));
        assert_eq!(MemberRef::parse("2024"), MemberRef::Name("2024".to_string()));
        assert_eq!(
            MemberRef::parse("Alice +vip"),
            MemberRef::Name("Alice +vip".to_string())
        );
        assert_eq!(MemberRef::parse("#"), MemberRef::Name("#".to_string()));
    }
}
