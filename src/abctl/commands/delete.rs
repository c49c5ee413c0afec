use crate::client::PlayerService;
use crate::commands::CmdResult;
use crate::error::{AbctlError, Result};

/// Parses a player id given on the command line. Only base-10 integers are accepted.
pub fn parse_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(AbctlError::MissingArgument("id"))?;
    raw.parse::<i64>().map_err(|e| {
        AbctlError::MalformedArgument(format!("error parsing player id {:?}: {}", raw, e))
    })
}

/// Deletes immediately; there is no confirmation step.
pub fn run<S: PlayerService>(service: &S, raw_id: Option<&str>) -> Result<CmdResult> {
    let id = parse_id(raw_id)?;
    service.delete(id)?;
    Ok(CmdResult::default().with_deleted_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::InMemoryService;
    use crate::model::Player;
    use chrono::Utc;

    fn seeded() -> InMemoryService {
        let now = Utc::now();
        InMemoryService::with_players(vec![Player {
            id: 4,
            name: "bot4".into(),
            version: 2,
            author_id: 1,
            path: "players/4/bot4".into(),
            created_at: now,
            updated_at: now,
        }])
    }

    #[test]
    fn deletes_by_id() {
        let service = seeded();
        let result = run(&service, Some("4")).unwrap();
        assert_eq!(result.deleted_id, Some(4));
        assert!(service.players().is_empty());
    }

    #[test]
    fn non_numeric_id_never_reaches_the_service() {
        let service = seeded();
        let err = run(&service, Some("abc")).unwrap_err();
        assert!(matches!(err, AbctlError::MalformedArgument(_)));
        assert!(err.to_string().contains("error parsing player id"));
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn missing_id_is_not_a_parse_error() {
        let service = seeded();
        let err = run(&service, None).unwrap_err();
        assert!(matches!(err, AbctlError::MissingArgument("id")));
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn parse_id_rejects_other_radixes() {
        assert!(parse_id(Some("0x10")).is_err());
        assert!(parse_id(Some("1.5")).is_err());
        assert!(parse_id(Some(" 4 ")).is_err());
        assert!(parse_id(Some("")).is_err());
        assert_eq!(parse_id(Some("-3")).unwrap(), -3);
        assert_eq!(parse_id(Some("0042")).unwrap(), 42);
    }

    #[test]
    fn unknown_id_surfaces_remote_error() {
        let service = seeded();
        let err = run(&service, Some("99")).unwrap_err();
        assert!(matches!(err, AbctlError::Remote(_)));
        assert_eq!(service.players().len(), 1);
    }
}
