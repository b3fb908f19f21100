//! End-to-end play-throughs driven through `ColonySession::process`.

use colony_core::item::names;
use colony_core::{GameConfig, INVENTORY_STATE, MAIN_STATE, Quest};
use colony_fiction::{ColonySession, Cue, Ending, Flow};

fn session() -> ColonySession {
    ColonySession::new(GameConfig::default()).unwrap()
}

/// A session with debug mode on, so setup can use `debug` commands.
fn debug_session(config: GameConfig) -> ColonySession {
    let mut s = ColonySession::new(config).unwrap();
    s.process("debugmode");
    s.drain_messages();
    s
}

/// Run each line, discarding messages, and return the last flow.
fn run(s: &mut ColonySession, lines: &[&str]) -> Flow {
    let mut flow = Flow::Continue;
    for line in lines {
        flow = s.process(line).flow;
        s.drain_messages();
    }
    flow
}

fn say(s: &mut ColonySession, line: &str) -> Vec<String> {
    s.process(line);
    s.drain_messages()
}

fn here(s: &ColonySession) -> String {
    s.location().unwrap().name().to_string()
}

fn actions(s: &ColonySession) -> Vec<String> {
    s.location().unwrap().available_actions().to_vec()
}

fn give(s: &mut ColonySession, item: &str, count: usize) {
    for _ in 0..count {
        s.process(&format!("debug give {item}"));
    }
    s.drain_messages();
}

// ---------------------------------------------------------------------------
// Items and menus
// ---------------------------------------------------------------------------

#[test]
fn cupboard_items_can_be_taken_and_listed() {
    let mut s = session();
    let opened = say(&mut s, "open cupboard");
    assert_eq!(opened, vec!["The cupboard's contents have made themselves known."]);
    assert_eq!(actions(&s), vec!["take ID card", "take mining gun", "go back"]);

    assert_eq!(say(&mut s, "1"), vec!["You took the ID card."]);
    assert_eq!(
        say(&mut s, "take mining gun"),
        vec!["You took the mining gun.", "The cupboard is now empty."]
    );
    assert!(s.location().unwrap().in_state(MAIN_STATE));

    let listing = say(&mut s, "inventory");
    assert!(listing[0].starts_with("Your inventory contains:"));
    assert!(listing[0].contains("- ID card: "));
    assert!(listing[0].contains("- mining gun: "));
    assert!(s.location().unwrap().in_state(INVENTORY_STATE));
    assert!(s.actor().has_item_named(names::ID_CARD));
}

#[test]
fn reopening_an_empty_cupboard() {
    let mut s = session();
    run(&mut s, &["open cupboard"]);
    assert_eq!(
        say(&mut s, "open cupboard"),
        vec!["You already opened the cupboard."]
    );
}

#[test]
fn key_items_cannot_be_dropped() {
    let mut s = session();
    run(&mut s, &["open cupboard", "take id card"]);
    assert_eq!(
        say(&mut s, "drop id card"),
        vec!["You should probably hold on to this."]
    );
    assert!(s.actor().has_item_named(names::ID_CARD));
}

#[test]
fn out_of_range_menu_number() {
    let mut s = session();
    assert_eq!(say(&mut s, "9"), vec!["Invalid action number: 9"]);
}

#[test]
fn travel_advances_the_clock() {
    let mut s = session();
    run(&mut s, &["go residential corridor"]);
    assert_eq!(here(&s), "Residential Corridor");
    assert_eq!(s.clock().hour(), 0.5);

    assert_eq!(
        say(&mut s, "go nowhere"),
        vec!["There is no way to go 'nowhere'!"]
    );
    assert_eq!(s.clock().hour(), 0.5);
}

#[test]
fn magnotube_ride_is_cued() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto residential entrance"]);
    s.drain_cues();
    run(&mut s, &["go central plaza"]);
    assert_eq!(here(&s), "Central Plaza");
    assert!(matches!(s.drain_cues().as_slice(), [Cue::Animation { .. }]));
}

fn count_matching(items: &[String], wanted: &str) -> usize {
    items.iter().filter(|item| item.contains(wanted)).count()
}

#[test]
fn revisiting_the_corridor_keeps_one_cecil() {
    let mut s = session();
    run(
        &mut s,
        &[
            "go residential corridor",
            "go your quarters",
            "go residential corridor",
        ],
    );
    assert_eq!(here(&s), "Residential Corridor");
    let loc = s.location().unwrap();
    assert_eq!(count_matching(loc.npcs(), "Greyman Cecil"), 1);
    assert_eq!(count_matching(&actions(&s), "talk to Greyman Cecil"), 1);
}

#[test]
fn revisiting_the_corridor_keeps_cecils_mark() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "lucky coin", 1);
    run(
        &mut s,
        &[
            "debug goto residential corridor",
            "talk to greyman cecil",
            "say \"you alright cecil\"",
            "are you sure you alright?",
            "offer lucky coin",
        ],
    );
    assert!(s.actor().is_quest_complete(Quest::Cecil));

    run(&mut s, &["go your quarters", "go residential corridor"]);
    assert_eq!(here(&s), "Residential Corridor");
    let loc = s.location().unwrap();
    assert_eq!(loc.npcs().to_vec(), vec!["Greyman Cecil ✓".to_string()]);
    assert_eq!(count_matching(&actions(&s), "talk to Greyman Cecil"), 1);
}

#[test]
fn revisiting_the_market_keeps_one_of_each_stall() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &[
            "debug goto colony market",
            "go central plaza",
            "go colony market",
            "go central plaza",
            "go colony market",
        ],
    );
    assert_eq!(here(&s), "Colony Market");
    let menu = actions(&s);
    assert_eq!(count_matching(&menu, "approach Merchant Armedas stall"), 1);
    assert_eq!(count_matching(&menu, "approach Blackest of Markets stall"), 1);
}

// ---------------------------------------------------------------------------
// Checkpoints and facility hours
// ---------------------------------------------------------------------------

#[test]
fn residential_checkpoint_requires_id_card() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto security checkpoint (residential)"]);

    assert_eq!(
        say(&mut s, "go industrial sector"),
        vec!["You need your ID card to pass. Creedal shakes his head."]
    );
    assert_eq!(here(&s), "Security Checkpoint (Residential)");

    give(&mut s, "id card", 1);
    let messages = say(&mut s, "go industrial sector");
    assert_eq!(here(&s), "Residential Checkpoint Gate");
    assert!(messages[0].starts_with("You scan your ID card."));

    run(&mut s, &["go industrial plaza"]);
    assert_eq!(here(&s), "Industrial Plaza");
}

#[test]
fn industrial_checkpoint_leads_back_to_central_plaza() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    run(
        &mut s,
        &[
            "debug goto security checkpoint (industrial)",
            "go residential sector",
        ],
    );
    assert_eq!(here(&s), "Industrial Checkpoint Gate");
    run(&mut s, &["go central plaza"]);
    assert_eq!(here(&s), "Central Plaza");
}

#[test]
fn refinery_is_closed_for_maintenance() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto industrial plaza", "debug set time 16"]);
    assert_eq!(
        say(&mut s, "go refinery"),
        vec!["The Refinery is closed from 15:00-20:00 for standard maintenance."]
    );
    assert_eq!(here(&s), "Industrial Plaza");

    run(&mut s, &["debug set time 10", "go refinery"]);
    assert_eq!(here(&s), "Refinery");
}

// ---------------------------------------------------------------------------
// Donations and the foreman
// ---------------------------------------------------------------------------

#[test]
fn foreman_appears_once_after_enough_donations() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto memorial pond", "debug set minshin 1000"]);

    run(&mut s, &["donate minshin into donation terminal", "150"]);
    assert_eq!(s.total_donations(), 150);
    assert!(!s.location().unwrap().has_npc("Colony Foreman Long"));

    let messages = say(&mut s, "donate minshin into donation terminal");
    assert_eq!(messages[0], "Donations Received: 150/200 Minshin.");
    let messages = say(&mut s, "60");
    assert!(messages[0].starts_with("You donated 60 Minshin."));
    assert!(s.location().unwrap().has_npc("Colony Foreman Long"));

    run(&mut s, &["donate minshin into donation terminal", "10"]);
    let location = s.location().unwrap();
    assert_eq!(
        location
            .npcs()
            .iter()
            .filter(|npc| npc.contains("Long"))
            .count(),
        1
    );
    assert_eq!(
        actions(&s)
            .iter()
            .filter(|label| label.as_str() == "talk to Colony Foreman Long")
            .count(),
        1
    );
    assert_eq!(s.actor().minshin(), 780);
}

#[test]
fn donation_prompt_validates_amounts() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &["debug goto memorial pond", "donate minshin into donation terminal"],
    );
    assert_eq!(say(&mut s, "5"), vec!["You must donate at least 10 Minshin."]);
    assert_eq!(
        say(&mut s, "lots"),
        vec!["Please enter a valid number or type 'go back'."]
    );
    assert_eq!(
        say(&mut s, "60"),
        vec!["You don't have enough Minshin. You only have 50."]
    );
    assert_eq!(
        say(&mut s, "go back"),
        vec!["You step back from the donation bucket."]
    );
    assert!(s.location().unwrap().in_state(MAIN_STATE));
}

// ---------------------------------------------------------------------------
// Quests and endings
// ---------------------------------------------------------------------------

#[test]
fn cecil_takes_the_lucky_coin() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "lucky coin", 1);
    run(
        &mut s,
        &[
            "debug goto residential corridor",
            "talk to greyman cecil",
            "say \"you alright cecil\"",
            "are you sure you alright?",
        ],
    );
    assert_eq!(actions(&s)[0], "offer lucky coin");

    assert_eq!(run(&mut s, &["offer lucky coin"]), Flow::Continue);
    assert!(s.actor().is_quest_complete(Quest::Cecil));
    assert!(!s.actor().has_item_named(names::LUCKY_COIN));
    assert!(s.location().unwrap().npcs().contains(&"Greyman Cecil ✓".to_string()));
    assert!(matches!(
        s.drain_cues().as_slice(),
        [Cue::Appreciation { npc, .. }] if npc == "Greyman Cecil"
    ));

    assert_eq!(
        say(&mut s, "talk to greyman cecil"),
        vec!["'Cecil's respect for you is almost palpable.'"]
    );
}

#[test]
fn ephsus_counts_soil_across_visits() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "thebian ground soil", 4);
    run(
        &mut s,
        &[
            "debug goto central plaza",
            "talk to science officer ephsus",
            "ask why looks like she's contemplating",
            "offer thebian ground soil",
        ],
    );
    assert_eq!(s.actor().quest_counter(Quest::Ephsus), 4);
    assert!(!s.actor().is_quest_complete(Quest::Ephsus));

    give(&mut s, "thebian ground soil", 8);
    run(&mut s, &["offer thebian ground soil"]);
    assert!(s.actor().is_quest_complete(Quest::Ephsus));
    assert_eq!(s.actor().count_of(names::GROUND_SOIL), 2);
}

#[test]
fn final_quest_ends_the_game_anywhere() {
    let mut s = debug_session(GameConfig::default());
    for quest in [Quest::Cecil, Quest::Ephsus, Quest::Weatherbee, Quest::ForemanLong] {
        s.actor_mut().complete_quest(quest);
    }
    give(&mut s, "steamed buns", 1);
    run(
        &mut s,
        &[
            "debug goto security checkpoint (residential)",
            "talk to security officer creedal",
            "ask why creedal is drooling",
        ],
    );
    assert_eq!(actions(&s)[0], "offer steamed buns");
    assert_eq!(
        run(&mut s, &["offer steamed buns"]),
        Flow::Finished(Ending::Good)
    );
}

#[test]
fn talking_to_the_foreman_completes_his_quest() {
    let mut s = debug_session(GameConfig::default());
    for quest in [Quest::Cecil, Quest::Ephsus, Quest::Weatherbee, Quest::Creedal] {
        s.actor_mut().complete_quest(quest);
    }
    run(
        &mut s,
        &[
            "debug goto memorial pond",
            "debug set minshin 200",
            "donate minshin into donation terminal",
            "200",
        ],
    );
    assert_eq!(
        run(&mut s, &["talk to colony foreman long"]),
        Flow::Finished(Ending::Good)
    );
}

#[test]
fn weatherbee_needs_the_job_listing_and_the_slump() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &[
            "debug goto residential entrance",
            "look at bulletin board",
            "read recent job listings",
            "debug goto security checkpoint (industrial)",
            "talk to security officer weatherbee",
        ],
    );
    assert_eq!(actions(&s)[0], "congratulations on your new job");
    run(&mut s, &["congratulations on your new job", "go back"]);

    run(&mut s, &["debug set time 16", "talk to security officer weatherbee"]);
    assert_eq!(actions(&s)[0], "hows your spirits now weatherbee");
    run(&mut s, &["hows your spirits now weatherbee", "give weatherbee a high five"]);
    assert!(s.actor().is_quest_complete(Quest::Weatherbee));
}

#[test]
fn talking_to_someone_absent() {
    let mut s = session();
    assert_eq!(
        say(&mut s, "talk to Ephsus"),
        vec!["You try talking to ephsus, but don't know where to start."]
    );
}

#[test]
fn quota_period_end_picks_an_ending() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug set quota 20"]);
    assert_eq!(
        run(&mut s, &["debug set day 3"]),
        Flow::Finished(Ending::AverageWorker)
    );

    let mut s = debug_session(GameConfig::default());
    assert_eq!(
        run(&mut s, &["debug set day 3"]),
        Flow::Finished(Ending::Deportation)
    );
}

// ---------------------------------------------------------------------------
// Mining and deposits
// ---------------------------------------------------------------------------

#[test]
fn mining_yields_one_resource() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "mining gun", 1);
    run(&mut s, &["debug goto mine entrance"]);
    let before = s.actor().inventory().len();

    let messages = say(&mut s, "mine away");
    assert!(messages[0].starts_with("You have mined: "));
    assert_eq!(s.actor().inventory().len(), before + 1);
    assert_eq!(s.clock().hour(), 0.5);
    assert!(
        s.drain_cues()
            .iter()
            .any(|cue| matches!(cue, Cue::Mining { seconds } if (0.5..2.0).contains(seconds)))
    );
}

#[test]
fn mining_needs_the_gun_and_open_hours() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto mine entrance"]);
    assert_eq!(say(&mut s, "mine away"), vec!["You need a mining gun to mine."]);

    run(&mut s, &["debug set time 16"]);
    give(&mut s, "mining gun", 1);
    assert_eq!(
        say(&mut s, "mine away"),
        vec!["The mines are closed. It's too late in the day. Mines are open from 00:00 to 15:00."]
    );
}

#[test]
fn skeleton_ends_the_game() {
    let config = GameConfig {
        skeleton_discovery_threshold: 0,
        skeleton_discovery_chance: 1.0,
        ..GameConfig::default()
    };
    let mut s = debug_session(config);
    give(&mut s, "mining gun", 1);
    run(&mut s, &["debug goto mine entrance"]);
    assert_eq!(
        run(&mut s, &["mine away"]),
        Flow::Finished(Ending::Skeleton)
    );
    assert!(
        s.drain_cues()
            .iter()
            .any(|cue| matches!(cue, Cue::Discovery { subject, .. } if subject == "Skeleton"))
    );
}

#[test]
fn deposit_before_quota_counts_toward_it() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    give(&mut s, "ambrosium crystal", 3);
    give(&mut s, "ambrosium cluster", 1);
    run(&mut s, &["debug goto deposit station", "deposit resources"]);

    let messages = say(&mut s, "insert id card");
    assert_eq!(s.actor().quota_fulfilled(), 8);
    assert_eq!(s.actor().minshin(), 50);
    assert_eq!(s.actor().count_of(names::AMBROSIUM_CRYSTAL), 0);
    assert_eq!(s.actor().count_of(names::AMBROSIUM_CLUSTER), 0);
    assert!(messages.contains(&"Total quota progress this deposit: 8.".to_string()));
    assert!(s.location().unwrap().in_state(MAIN_STATE));
}

#[test]
fn deposit_after_quota_pays_minshin() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    give(&mut s, "ambrosium crystal", 2);
    run(
        &mut s,
        &[
            "debug set quota 20",
            "debug goto deposit station",
            "deposit resources",
            "insert id card",
        ],
    );
    assert_eq!(s.actor().minshin(), 550);
    assert_eq!(s.actor().quota_fulfilled(), 20);
    assert!(!s.drain_cues().contains(&Cue::QuotaCelebration));
}

#[test]
fn mixed_deposit_after_quota_pays_per_weighted_unit() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    give(&mut s, "ambrosium crystal", 3);
    give(&mut s, "ambrosium cluster", 2);
    run(
        &mut s,
        &[
            "debug set quota 20",
            "debug goto deposit station",
            "deposit resources",
        ],
    );
    s.drain_cues();

    let messages = say(&mut s, "insert id card");
    // (3 + 2 * 5) * 250
    assert_eq!(s.actor().minshin(), 50 + 3250);
    assert_eq!(s.actor().quota_fulfilled(), 20);
    assert_eq!(s.actor().count_of(names::AMBROSIUM_CRYSTAL), 0);
    assert_eq!(s.actor().count_of(names::AMBROSIUM_CLUSTER), 0);
    assert!(messages.contains(
        &"Total bonus earnings: 3250 Minshin. Your balance is now 3300.".to_string()
    ));
    assert!(!messages.iter().any(|m| m.starts_with("Total quota progress")));
    assert!(!s.drain_cues().contains(&Cue::QuotaCelebration));
}

#[test]
fn meeting_the_quota_is_celebrated_once() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    give(&mut s, "ambrosium crystal", 2);
    run(
        &mut s,
        &[
            "debug set quota 18",
            "debug goto deposit station",
            "deposit resources",
            "insert id card",
        ],
    );
    assert_eq!(s.actor().quota_fulfilled(), 20);
    assert!(s.drain_cues().contains(&Cue::QuotaCelebration));
}

#[test]
fn refinery_removes_exactly_the_deposited_materials() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "id card", 1);
    give(&mut s, "thebian ground soil", 2);
    give(&mut s, "clagnum putty", 1);
    give(&mut s, "ambrosium crystal", 2);
    run(
        &mut s,
        &[
            "debug goto refinery",
            "deposit non-ambrosium materials",
            "insert id card",
        ],
    );
    assert_eq!(s.actor().minshin(), 120);
    assert_eq!(s.actor().count_of(names::GROUND_SOIL), 0);
    assert_eq!(s.actor().count_of(names::CLAGNUM_PUTTY), 0);
    assert_eq!(s.actor().count_of(names::AMBROSIUM_CRYSTAL), 2);
    assert!(s.actor().has_item_named(names::ID_CARD));
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

#[test]
fn stall_sells_the_backpack_once() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &[
            "debug goto colony market",
            "debug set minshin 600",
            "approach merchant armedas stall",
        ],
    );
    assert_eq!(actions(&s)[0], "buy Olympus XL Backpack (500 Minshin)");

    run(&mut s, &["1"]);
    assert_eq!(s.actor().inventory_capacity(), 20);
    assert_eq!(s.actor().minshin(), 100);
    assert_eq!(actions(&s)[0], "Olympus XL Backpack -bought-");
}

#[test]
fn stall_keeps_buns_when_inventory_is_full() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "thebian ground soil", 10);
    run(
        &mut s,
        &[
            "debug goto colony market",
            "debug set minshin 600",
            "approach merchant armedas stall",
        ],
    );
    assert_eq!(say(&mut s, "2"), vec!["Your inventory is full."]);
    assert_eq!(s.actor().minshin(), 600);
    assert!(!s.actor().has_item_named(names::STEAMED_BUNS));
    assert!(actions(&s).contains(&"buy Steamed Buns (150 Minshin)".to_string()));
}

#[test]
fn hinter_refunds_when_nothing_is_left() {
    let mut s = debug_session(GameConfig::default());
    for quest in Quest::ALL {
        s.actor_mut().complete_quest(quest);
    }
    run(&mut s, &["debug goto colony market", "visit hinter's prophecies"]);
    let messages = say(&mut s, "what should I pay my attention to? (50 Minshin)");
    assert!(messages[0].ends_with("Your Minshin is returned."));
    assert_eq!(s.actor().minshin(), 50);
}

#[test]
fn hinter_charges_for_a_prophecy() {
    let mut s = debug_session(GameConfig::default());
    run(&mut s, &["debug goto colony market", "visit hinter's prophecies", "1"]);
    assert_eq!(s.actor().minshin(), 0);
}

#[test]
fn black_market_stall_disappears_after_purchase() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &[
            "debug set day 1",
            "debug set minshin 5000",
            "debug goto colony market",
            "approach blackest of markets stall",
            "buy communications tower id card (4000 minshin)",
        ],
    );
    assert_eq!(s.actor().minshin(), 1000);
    assert!(s.actor().has_item_named(names::TOWER_ID_CARD));
    assert!(!actions(&s).contains(&"approach Blackest of Markets stall".to_string()));

    run(&mut s, &["go central plaza", "go colony market"]);
    assert!(!actions(&s).contains(&"approach Blackest of Markets stall".to_string()));
}

#[test]
fn black_market_is_shut_on_day_zero() {
    let mut s = debug_session(GameConfig::default());
    run(
        &mut s,
        &["debug goto colony market", "approach blackest of markets stall"],
    );
    assert!(s.location().unwrap().in_state("blackest_market_sign"));
}

#[test]
fn forged_card_is_confiscated_at_the_tower() {
    let mut s = debug_session(GameConfig::default());
    give(&mut s, "communications tower id card", 1);
    run(
        &mut s,
        &[
            "debug goto communications tower entrance",
            "approach terminal",
            "insert communications tower id card",
        ],
    );
    assert!(!s.actor().has_item_named(names::TOWER_ID_CARD));
    assert!(s.location().unwrap().in_state(MAIN_STATE));
}

// ---------------------------------------------------------------------------
// Debug tooling
// ---------------------------------------------------------------------------

#[test]
fn debug_commands_need_debug_mode() {
    let mut s = session();
    assert_eq!(say(&mut s, "debug set day 2"), vec!["Debug mode is not active."]);
    assert_eq!(s.clock().day(), 0);
}

#[test]
fn debug_rejects_bad_values() {
    let mut s = debug_session(GameConfig::default());
    assert_eq!(
        say(&mut s, "debug set time abc"),
        vec!["Debug command failed: invalid value 'abc'."]
    );
    assert_eq!(
        say(&mut s, "debug give spaceship"),
        vec!["Debug: Unknown item 'spaceship'."]
    );
    let messages = say(&mut s, "debug goto nowhere");
    assert_eq!(messages[0], "Debug: Unknown room 'nowhere'.");
    assert!(messages[1].starts_with("Available: your quarters"));
    assert_eq!(here(&s), "Your Quarters");
}
