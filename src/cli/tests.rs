use super::*;

#[test]
fn test_local_flag_without_subcommand() {
    let cli = Cli::try_parse_from(["kindabot", "--local"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.responder.local);
}

#[test]
fn test_responder_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["kindabot", "ask", "--local", "-m", "gpt-4o", "hi", "there"]).unwrap();
    assert!(cli.responder.local);
    assert_eq!(cli.responder.model.as_deref(), Some("gpt-4o"));
    match cli.command {
        Some(Commands::Ask { prompt }) => assert_eq!(prompt, vec!["hi", "there"]),
        other => panic!("expected ask, got {other:?}"),
    }
}

#[test]
fn test_model_flag_before_chat() {
    let cli = Cli::try_parse_from(["kindabot", "--model", "gpt-4o-mini", "chat"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Chat)));
    assert_eq!(cli.responder.model.as_deref(), Some("gpt-4o-mini"));
    assert!(!cli.responder.local);
}
