//! Property tests for ranking, points and aggregation

use proptest::prelude::*;
use std::collections::HashMap;
use swim_scoring::scoring::{points, LeaderboardAggregator};
use swim_scoring::timing::{format_seconds, ms_to_seconds, parse_seconds, seconds_to_ms};
use swim_scoring::types::{Event, EventEntries, PlayerId, Registration, TimingRecord, UniversityId};
use swim_scoring::{score_event, Rank, RankedResult};

const UNIVERSITIES: [&str; 3] = ["north", "south", "east"];

fn event_entries(event_id: &str, times: &[Option<i64>], offset: usize) -> EventEntries {
    let registrations = times
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let player = (i + offset) % 16;
            Registration {
                player_id: format!("p{}", player),
                event_id: event_id.to_string(),
                player_name: format!("Player {}", player),
                university_id: UNIVERSITIES[player % 3].to_string(),
                university_name: UNIVERSITIES[player % 3].to_uppercase(),
            }
        })
        .collect::<Vec<_>>();
    let timings = registrations
        .iter()
        .zip(times)
        .map(|(r, time)| TimingRecord::new(r.player_id.clone(), event_id, *time))
        .collect();

    EventEntries {
        event: Event {
            id: event_id.to_string(),
            name: event_id.to_string(),
        },
        registrations,
        timings,
    }
}

fn no_directory() -> HashMap<PlayerId, UniversityId> {
    HashMap::new()
}

fn scored(times: &[Option<i64>]) -> Vec<RankedResult> {
    let entries = event_entries("e", times, 0);
    score_event(&entries.registrations, &entries.timings).unwrap()
}

fn times_strategy(max_len: usize) -> impl Strategy<Value = Vec<Option<i64>>> {
    // Narrow range so ties are common
    prop::collection::vec(prop::option::weighted(0.8, 0i64..20), 0..max_len)
}

fn tournament_strategy() -> impl Strategy<Value = Vec<Vec<Option<i64>>>> {
    prop::collection::vec(times_strategy(8), 0..5)
}

fn tournament(events: &[Vec<Option<i64>>]) -> Vec<EventEntries> {
    events
        .iter()
        .enumerate()
        .map(|(i, times)| event_entries(&format!("e{}", i), times, i))
        .collect()
}

proptest! {
    #[test]
    fn prop_one_result_per_registration(times in times_strategy(12)) {
        prop_assert_eq!(scored(&times).len(), times.len());
    }

    #[test]
    fn prop_faster_never_ranks_worse(times in times_strategy(12)) {
        let results = scored(&times);
        for a in &results {
            for b in &results {
                if let (Some(ta), Some(tb)) = (a.time_ms, b.time_ms) {
                    if ta < tb {
                        prop_assert!(a.rank < b.rank);
                    }
                    if ta == tb {
                        prop_assert_eq!(a.rank, b.rank);
                        prop_assert_eq!(a.points, b.points);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_unranked_exactly_when_untimed(times in times_strategy(12)) {
        for result in scored(&times) {
            prop_assert_eq!(result.time_ms.is_none(), result.rank == Rank::Unranked);
            if result.rank == Rank::Unranked {
                prop_assert_eq!(result.points, 0);
            }
        }
    }

    #[test]
    fn prop_rank_jumps_by_tie_group_size(times in times_strategy(12)) {
        let results = scored(&times);
        let mut ranked: Vec<u32> = results.iter().filter_map(|r| r.rank.value()).collect();
        ranked.sort_unstable();

        let mut index = 0;
        let mut expected = 1;
        while index < ranked.len() {
            let rank = ranked[index];
            prop_assert_eq!(rank, expected);
            let group = ranked.iter().filter(|r| **r == rank).count();
            index += group;
            expected = rank + group as u32;
        }
    }

    #[test]
    fn prop_points_follow_the_table(times in times_strategy(12)) {
        for result in scored(&times) {
            prop_assert_eq!(result.points, points(result.rank));
        }
    }

    #[test]
    fn prop_player_totals_sum_event_points(events in tournament_strategy()) {
        let events = tournament(&events);
        let aggregator = LeaderboardAggregator::default();
        let standings = aggregator.standings(&events, &no_directory()).unwrap();

        let mut expected: HashMap<&str, u32> = HashMap::new();
        for event in &standings.events {
            for result in &event.results {
                *expected.entry(result.player_id.as_str()).or_default() += result.points;
            }
        }

        prop_assert_eq!(standings.leaderboards.players.len(), expected.len());
        for player in &standings.leaderboards.players {
            prop_assert_eq!(Some(&player.total_points), expected.get(player.player_id.as_str()));
        }
    }

    #[test]
    fn prop_university_totals_sum_player_totals(events in tournament_strategy()) {
        let events = tournament(&events);
        let standings = LeaderboardAggregator::default()
            .standings(&events, &no_directory())
            .unwrap();
        let boards = &standings.leaderboards;

        let player_sum: u32 = boards.players.iter().map(|p| p.total_points).sum();
        let university_sum: u32 = boards.universities.iter().map(|u| u.total_points).sum();
        prop_assert_eq!(player_sum, university_sum);

        for university in &boards.universities {
            let members: u32 = boards
                .players
                .iter()
                .filter(|p| p.university_name == university.name)
                .map(|p| p.total_points)
                .sum();
            prop_assert_eq!(members, university.total_points);
        }
    }

    #[test]
    fn prop_leaderboards_are_sorted_and_competition_ranked(events in tournament_strategy()) {
        let events = tournament(&events);
        let boards = LeaderboardAggregator::default()
            .build(&events, &no_directory())
            .unwrap();

        for (i, pair) in boards.players.windows(2).enumerate() {
            prop_assert!(pair[0].total_points >= pair[1].total_points);
            if pair[0].total_points == pair[1].total_points {
                prop_assert_eq!(pair[0].rank, pair[1].rank);
            } else {
                prop_assert_eq!(pair[1].rank, i as u32 + 2);
            }
        }
        if let Some(first) = boards.players.first() {
            prop_assert_eq!(first.rank, 1);
        }
    }

    #[test]
    fn prop_recomputation_is_idempotent(events in tournament_strategy()) {
        let events = tournament(&events);
        let parallel = LeaderboardAggregator::default();
        let sequential = LeaderboardAggregator::default().sequential();

        let first = parallel.build(&events, &no_directory()).unwrap();
        let second = parallel.build(&events, &no_directory()).unwrap();
        let third = sequential.build(&events, &no_directory()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &third);
    }

    #[test]
    fn prop_seconds_round_trip_for_multiples_of_ten(centis in 0i64..10_000_000) {
        let ms = centis * 10;
        prop_assert_eq!(seconds_to_ms(ms_to_seconds(ms)).unwrap(), ms);
        prop_assert_eq!(parse_seconds(&format_seconds(ms)).unwrap(), ms);
    }

    #[test]
    fn prop_seconds_round_to_nearest_ten_ms(ms in 0i64..100_000_000) {
        let rounded = parse_seconds(&format_seconds(ms)).unwrap();
        prop_assert_eq!(rounded % 10, 0);
        prop_assert!((rounded - ms).abs() <= 5);
    }
}
