//! Performance tests for the per-frame read path

use std::sync::Arc;
use std::time::Instant;
use yasp::{generate_map, layouts, GameEvent, GameState, YaspResult};

#[test]
fn test_frame_tile_sweep_performance() -> YaspResult<()> {
    // A map larger than any window shows
    let map = generate_map(12345, 200, 120)?;
    let game = GameState::new(map, (100, 60));
    let (width, height) = game.get_map_dimensions();

    let start = Instant::now();
    let iterations = 30;

    for _ in 0..iterations {
        // Same reads as one redraw: every cell, the player and the log panel
        let mut glyphs = 0usize;
        for y in 0..height {
            for x in 0..width {
                game.get_map_tile(x, y)?;
                glyphs += 1;
            }
        }
        assert_eq!(glyphs, (width * height) as usize);
        let _pos = game.get_player_pos();
        let _rows = game.quest_log().latest(20);
    }

    let elapsed = start.elapsed();
    let avg_frame_time = elapsed / iterations;

    println!("Average frame sweep time: {:?}", avg_frame_time);

    // Debug builds still have to fit a 30 FPS frame
    assert!(
        avg_frame_time.as_millis() < 33,
        "Frame sweep too slow: {:?}",
        avg_frame_time
    );

    Ok(())
}

#[tokio::test]
async fn test_event_throughput() {
    let game = Arc::new(GameState::new(layouts::one(), (2, 2)));
    let handle = Arc::clone(&game).spawn();

    let start = Instant::now();
    let iterations = 10_000;

    for i in 0..iterations {
        let step = if i % 2 == 0 { 1 } else { -1 };
        handle
            .send(GameEvent::Movement {
                off_x: step,
                off_y: 0,
            })
            .await
            .unwrap();
    }
    let processed = handle.drain().await;

    let elapsed = start.elapsed();
    println!("Processed {processed} events in {:?}", elapsed);

    assert_eq!(processed, iterations);
    assert_eq!(game.quest_log().len(), iterations as usize);
    assert!(
        elapsed.as_secs() < 5,
        "Event processing too slow: {:?}",
        elapsed
    );
}
