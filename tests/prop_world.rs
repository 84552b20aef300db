//! Property tests for map generation, neighbourhood queries, clamping and the
//! movement logging rule.

use proptest::prelude::*;
use std::sync::Arc;
use yasp::{
    generate_map, layouts, GameEvent, GameState, Map, Player, QuestLog, QuestLogItem, TileSet,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generation_is_deterministic(seed in any::<u64>(), w in 1i32..40, h in 1i32..40) {
        let a = generate_map(seed, w, h).unwrap();
        let b = generate_map(seed, w, h).unwrap();
        prop_assert_eq!(a.codes(), b.codes());
    }

    #[test]
    fn every_code_resolves(seed in any::<u64>(), w in 1i32..40, h in 1i32..40) {
        let map = generate_map(seed, w, h).unwrap();
        prop_assert_eq!(map.codes().len(), (w * h) as usize);
        let tileset = TileSet::default();
        for code in map.codes() {
            prop_assert!(tileset.tile(*code).is_some());
        }
    }

    #[test]
    fn neighbours_are_clipped(
        seed in any::<u64>(),
        w in 1i32..20,
        h in 1i32..20,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let map = generate_map(seed, w, h).unwrap();
        let x = (fx * w as f64) as i32;
        let y = (fy * h as f64) as i32;

        let neighbours = map.get_neighbours(x, y);
        prop_assert!(neighbours.len() <= 8);
        for n in &neighbours {
            prop_assert!(map.contains(n.x, n.y));
            prop_assert!((n.x - x).abs() <= 1 && (n.y - y).abs() <= 1);
            prop_assert!((n.x, n.y) != (x, y));
            prop_assert_eq!(n.tile, map.get_tile(n.x, n.y));
        }

        // Exactly the in-bounds candidates are returned.
        let expected = (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| (dx, dy) != (0, 0) && map.contains(x + dx, y + dy))
            .count();
        prop_assert_eq!(neighbours.len(), expected);
    }

    #[test]
    fn surrounding_tiles_wrap_into_bounds(
        seed in any::<u64>(),
        w in 1i32..20,
        h in 1i32..20,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let map = generate_map(seed, w, h).unwrap();
        let x = (fx * w as f64) as i32;
        let y = (fy * h as f64) as i32;

        for n in map.get_surrounding_tiles(x, y) {
            prop_assert!(map.contains(n.x, n.y));
        }
    }

    #[test]
    fn clamp_is_idempotent(
        x in -1000i32..1000,
        y in -1000i32..1000,
        max_x in 1i32..100,
        max_y in 1i32..100,
    ) {
        let mut player = Player::new(x, y);
        let once = player.clamp(max_x, max_y);
        let twice = player.clamp(max_x, max_y);
        prop_assert_eq!(once, twice);
        prop_assert!(player.is_within(max_x, max_y));
    }

    #[test]
    fn movement_logs_exactly_when_position_changes(
        start_x in 0i32..5,
        start_y in 0i32..5,
        off_x in -10i32..10,
        off_y in -10i32..10,
    ) {
        let game = GameState::new(layouts::one(), (start_x, start_y));
        let logged = game.apply_event(GameEvent::Movement { off_x, off_y });
        let (x, y) = game.get_player_pos();

        let expected = ((start_x + off_x).clamp(0, 4), (start_y + off_y).clamp(0, 4));
        prop_assert_eq!((x, y), expected);

        if (x, y) == (start_x, start_y) {
            prop_assert!(!logged);
            prop_assert_eq!(game.quest_log().len(), 0);
        } else {
            prop_assert!(logged);
            prop_assert_eq!(game.quest_log().len(), 1);
            let item = game.quest_log().get_item(0).unwrap();
            let old = format!("({:3},{:3})", start_x, start_y);
            let new = format!("({:3},{:3})", x, y);
            prop_assert!(item.message().contains(&old));
            prop_assert!(item.message().contains(&new));
        }
    }

    #[test]
    fn ascii_dump_round_trips(seed in any::<u64>(), w in 1i32..16, h in 1i32..10) {
        let map = generate_map(seed, w, h).unwrap();
        // Drop the header row and the row-number column of the dump.
        let layout: String = map
            .to_string()
            .lines()
            .skip(1)
            .map(|line| format!("{}\n", &line[1..]))
            .collect();
        let parsed = Map::from_ascii(Arc::new(TileSet::default()), &layout).unwrap();
        prop_assert_eq!(parsed, map);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn quest_log_keeps_completion_order(writers in 1usize..6, per_writer in 1usize..40) {
        let log = Arc::new(QuestLog::new());
        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    let mut last_len = 0;
                    for i in 0..per_writer {
                        log.add_item(QuestLogItem::new('*', format!("{w}:{i}")));
                        let len = log.len();
                        assert!(len > last_len);
                        last_len = len;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        prop_assert_eq!(log.len(), writers * per_writer);
        for w in 0..writers {
            let prefix = format!("{w}:");
            let order: Vec<usize> = (0..log.len())
                .filter_map(|i| {
                    let item = log.get_item(i).ok()?;
                    item.message().strip_prefix(&prefix)?.parse().ok()
                })
                .collect();
            prop_assert_eq!(order, (0..per_writer).collect::<Vec<_>>());
        }
    }
}
