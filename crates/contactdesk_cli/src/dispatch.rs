//! Maps parsed commands onto panel actions and prints panel responses.
//!
//! # Invariants
//! - Every command yields exactly one [`PanelResponse`].
//! - Only a rejected contact-manager action counts as a failure; reference
//!   panel problems are reported but never fail the run.

use crate::cli::{ContactsCommand, ListsCommand, PanelCommand};
use contactdesk_core::{
    ContactAction, Desk, MatrixAction, MemberRef, MessageLevel, PanelResponse,
};
use log::debug;
use std::fs;
use std::process::ExitCode;

const REJECTED_EXIT: u8 = 2;

/// Panel a command was routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Contacts(ContactAction),
    Matrix(MatrixAction),
    Document,
}

/// Response of one command plus the panel that produced it.
#[derive(Debug)]
pub struct Outcome {
    pub contact_panel: bool,
    pub response: PanelResponse,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        if self.contact_panel && self.response.level == MessageLevel::Error {
            ExitCode::from(REJECTED_EXIT)
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Builds the panel action for `command`.
///
/// Fails only when `contacts rename-all` cannot read its names file.
pub fn route(command: PanelCommand) -> Result<Route, String> {
    let route = match command {
        PanelCommand::Tags => Route::Contacts(ContactAction::Tags),
        PanelCommand::Filter { tags, mode } => Route::Contacts(ContactAction::Filter {
            tags,
            mode: mode.into(),
        }),
        PanelCommand::Reload => Route::Contacts(ContactAction::Reload),
        PanelCommand::Contacts(command) => Route::Contacts(contacts_action(command)?),
        PanelCommand::Lists(command) => Route::Contacts(lists_action(command)),
        PanelCommand::Matrix {
            charterers: true, ..
        } => Route::Matrix(MatrixAction::Charterers),
        PanelCommand::Matrix { charterer, .. } => {
            Route::Matrix(MatrixAction::Partition { charterer })
        }
        PanelCommand::Doc => Route::Document,
    };
    Ok(route)
}

fn contacts_action(command: ContactsCommand) -> Result<ContactAction, String> {
    let action = match command {
        ContactsCommand::Show => ContactAction::Contacts,
        ContactsCommand::Rename { row, name } => ContactAction::RenameContact { index: row, name },
        ContactsCommand::RenameAll { file } => {
            let text = fs::read_to_string(&file)
                .map_err(|err| format!("Could not read {}: {err}", file.display()))?;
            ContactAction::RenameAll {
                names: text.lines().map(str::to_string).collect(),
            }
        }
        ContactsCommand::Add { name } => ContactAction::AddContact { raw_name: name },
    };
    Ok(action)
}

fn lists_action(command: ListsCommand) -> ContactAction {
    match command {
        ListsCommand::Names => ContactAction::ListNames,
        ListsCommand::Show { name } => ContactAction::ShowList { name },
        ListsCommand::Save { name, members: raw } => ContactAction::SaveList {
            name,
            members: member_refs(&raw),
        },
        ListsCommand::Update { name, members: raw } => ContactAction::UpdateList {
            name,
            members: member_refs(&raw),
        },
        ListsCommand::Delete { name } => ContactAction::DeleteList { name },
    }
}

fn member_refs(raw: &[String]) -> Vec<MemberRef> {
    raw.iter().map(|item| MemberRef::parse(item)).collect()
}

/// Runs `command` against `desk`.
pub fn dispatch(desk: &mut Desk, command: PanelCommand) -> Outcome {
    debug!("event=command module=cli status=start command={:?}", command);
    match route(command) {
        Ok(Route::Contacts(action)) => Outcome {
            contact_panel: true,
            response: desk.contacts.handle(action),
        },
        Ok(Route::Matrix(action)) => Outcome {
            contact_panel: false,
            response: desk.matrix.handle(action),
        },
        Ok(Route::Document) => Outcome {
            contact_panel: false,
            response: desk.channel_list.show(),
        },
        Err(message) => Outcome {
            contact_panel: true,
            response: PanelResponse::error(message),
        },
    }
}

/// Prints `response`: messages by severity, then the body lines on stdout.
pub fn print_response(response: &PanelResponse) {
    if !response.message.is_empty() {
        match response.level {
            MessageLevel::Info => println!("{}", response.message),
            MessageLevel::Success => println!("ok: {}", response.message),
            MessageLevel::Warning => eprintln!("warning: {}", response.message),
            MessageLevel::Error => eprintln!("error: {}", response.message),
        }
    }
    for line in &response.lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::{route, Outcome, Route};
    use crate::cli::{ListsCommand, ModeArg, PanelCommand};
    use contactdesk_core::{ContactAction, FilterMode, MatrixAction, MemberRef, PanelResponse};
    use std::process::ExitCode;

    #[test]
    fn list_members_take_hash_rows_and_names() {
        let command = PanelCommand::Lists(ListsCommand::Save {
            name: "Team".to_string(),
            members: vec!["#0".to_string(), "2024".to_string(), "Bob +ops".to_string()],
        });
        assert_eq!(
            route(command).unwrap(),
            Route::Contacts(ContactAction::SaveList {
                name: "Team".to_string(),
                members: vec![
                    MemberRef::Index(0),
                    MemberRef::Name("2024".to_string()),
                    MemberRef::Name("Bob +ops".to_string()),
                ],
            })
        );
    }

    #[test]
    fn filter_and_matrix_commands_route_to_their_panels() {
        let filter = PanelCommand::Filter {
            tags: vec!["vip".to_string()],
            mode: ModeArg::Any,
        };
        assert_eq!(
            route(filter).unwrap(),
            Route::Contacts(ContactAction::Filter {
                tags: vec!["vip".to_string()],
                mode: FilterMode::Any,
            })
        );

        let matrix = PanelCommand::Matrix {
            charterer: None,
            charterers: true,
        };
        assert_eq!(route(matrix).unwrap(), Route::Matrix(MatrixAction::Charterers));
        assert_eq!(route(PanelCommand::Doc).unwrap(), Route::Document);
    }

    #[test]
    fn only_rejected_contact_actions_fail_the_run() {
        let rejected = Outcome {
            contact_panel: true,
            response: PanelResponse::error("nope"),
        };
        let reference = Outcome {
            contact_panel: false,
            response: PanelResponse::error("missing document"),
        };
        assert_eq!(rejected.exit_code(), ExitCode::from(2));
        assert_eq!(reference.exit_code(), ExitCode::SUCCESS);
    }
}
