use crate::client::PlayerService;
use crate::commands::validate::{require_in_order, Requirement};
use crate::commands::CmdResult;
use crate::error::{AbctlError, Result};
use crate::model::PlayerDraft;
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

/// Raw inputs for `players create`, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub version: Option<i64>,
    pub author: Option<i64>,
    pub exe: Option<PathBuf>,
}

fn has_name(args: &CreateArgs) -> bool {
    args.name.as_deref().is_some_and(|n| !n.trim().is_empty())
}

fn has_version(args: &CreateArgs) -> bool {
    args.version.is_some()
}

fn has_author(args: &CreateArgs) -> bool {
    args.author.is_some()
}

fn has_exe(args: &CreateArgs) -> bool {
    args.exe.is_some()
}

/// The exe comes last: opening it is the only check that touches the filesystem.
const REQUIRED: &[Requirement<CreateArgs>] = &[
    ("name", has_name),
    ("version", has_version),
    ("author", has_author),
    ("exe", has_exe),
];

pub fn run<S: PlayerService>(service: &S, args: &CreateArgs) -> Result<CmdResult> {
    require_in_order(args, REQUIRED)?;

    // Presence is guaranteed by the checks above.
    let name = args.name.clone().unwrap_or_default();
    let version = args.version.unwrap_or_default();
    let author = args.author.unwrap_or_default();
    let exe_path = args.exe.clone().unwrap_or_default();

    if version < 1 {
        return Err(AbctlError::MalformedArgument(format!(
            "version must be a positive integer, got {}",
            version
        )));
    }

    let mut exe = File::open(&exe_path).map_err(|source| AbctlError::LocalIo {
        path: exe_path.clone(),
        source,
    })?;
    debug!(path = %exe_path.display(), "opened player executable");

    let draft = PlayerDraft::new(name, version, author);
    let created = service.upload(author, &draft, &mut exe)?;

    Ok(CmdResult::default().with_listed_players(vec![created]))
}
