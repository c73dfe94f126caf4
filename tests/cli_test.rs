#[cfg(feature = "std")]
mod common;

#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use battleships::cli::{
        parse_board_size, parse_move, render_board, run_game, Command, InputError,
        GAME_OVER_MSG, INVALID_MOVE_MSG,
    };
    use battleships::{log_level, GameEngine, GameStatus};
    use log::LevelFilter;

    use crate::common::fixed_board;

    #[test]
    fn test_parse_board_size() {
        assert_eq!(parse_board_size("5\n"), Ok(5));
        assert_eq!(parse_board_size(" 26 "), Ok(26));
        assert_eq!(
            parse_board_size("4"),
            Err(InputError::SizeOutOfRange { size: 4 })
        );
        assert_eq!(
            parse_board_size("27"),
            Err(InputError::SizeOutOfRange { size: 27 })
        );
        assert_eq!(parse_board_size("ten"), Err(InputError::InvalidSize));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("a 1", 5), Ok(Command::Fire { row: 0, col: 0 }));
        assert_eq!(parse_move("e5\n", 5), Ok(Command::Fire { row: 4, col: 4 }));
        assert_eq!(parse_move("exit", 5), Ok(Command::Exit));
        assert_eq!(parse_move("", 5), Err(InputError::Empty));
        assert_eq!(parse_move("B 2", 5), Err(InputError::InvalidRow));
        assert_eq!(parse_move("ab 2", 5), Err(InputError::InvalidRow));
        assert_eq!(parse_move("b x", 5), Err(InputError::InvalidColumn));
        assert_eq!(
            parse_move("f 1", 5),
            Err(InputError::OffBoard { row: 'f', col: 1 })
        );
        assert_eq!(
            parse_move("a 0", 5),
            Err(InputError::OffBoard { row: 'a', col: 0 })
        );
        assert_eq!(
            parse_move("a 6", 5),
            Err(InputError::OffBoard { row: 'a', col: 6 })
        );
    }

    #[test]
    fn test_render_board() {
        let mut engine = GameEngine::from_board(fixed_board());
        engine.fire(0, 0).unwrap();
        engine.fire(0, 4).unwrap();
        let text = render_board(engine.board());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], " ,1,2,3,4,5");
        assert_eq!(lines[1], "a x _ _ _ o");
        assert_eq!(lines[5], "e _ _ _ _ _");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_run_game_reprompts_and_exits() {
        let mut engine = GameEngine::from_board(fixed_board());
        let input = Cursor::new("zz 9\na 1\na 1\ne 5\nexit\n");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run_game(&mut engine, input, &mut out, &mut err).unwrap();
        assert_eq!(status, GameStatus::InProgress);

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().collect::<Vec<_>>(), vec![INVALID_MOVE_MSG]);
        assert!(out.contains("Hit!\n"));
        assert!(out.contains("Already been Hit\n"));
        assert!(out.contains("Miss\n"));
        assert!(out.trim_end().ends_with(GAME_OVER_MSG));
        assert_eq!(engine.shots(), 3);
    }

    #[test]
    fn test_run_game_to_victory() {
        let mut engine = GameEngine::from_board(fixed_board());
        let mut script = String::new();
        for r in 0..5u8 {
            for c in 1..=5 {
                script.push_str(&format!("{} {}\n", (b'a' + r) as char, c));
            }
        }
        let mut out = Vec::new();
        let status = run_game(&mut engine, Cursor::new(script), &mut out, Vec::new()).unwrap();
        assert_eq!(status, GameStatus::Won);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Hit and sunk.").count(), 5);
        assert!(out.contains("c x x x x o\n"));
        assert!(out.trim_end().ends_with(GAME_OVER_MSG));
    }

    #[test]
    fn test_run_game_stops_at_end_of_input() {
        let mut engine = GameEngine::from_board(fixed_board());
        let mut out = Vec::new();
        let status = run_game(&mut engine, Cursor::new("b 1\n"), &mut out, Vec::new()).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(engine.shots(), 1);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some("nonsense")), LevelFilter::Info);
        assert_eq!(log_level(None), LevelFilter::Info);
    }
}
