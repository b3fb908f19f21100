//! The colony map: every location, its menus, and how they connect.
//!
//! Built in two phases. All locations are allocated first, then exits are
//! wired by id. The Industrial Plaza and Refinery are singletons, so wiring
//! them twice (or asking for them from several places) is harmless.

use colony_core::item::names;
use colony_core::{Catalog, CoreResult, GO_BACK, Location, LocationId, MAIN_STATE, Singleton, WorldGraph};

use crate::error::FictionResult;

/// Interaction state ids used by the handlers.
pub mod states {
    /// Home terminal menu.
    pub const TERMINAL: &str = "terminal";
    /// Terminal waiting for the ID card.
    pub const PERSONAL_INFO: &str = "personal_info";
    /// Personnel file on screen.
    pub const VIEWING_INFO: &str = "viewing_info";
    /// The cupboard in Your Quarters.
    pub const CUPBOARD: &str = "cupboard";
    /// Talking to Cecil.
    pub const CECIL_TALK: &str = "cecil_talk";
    /// Cecil explains the dust.
    pub const CECIL_INFO: &str = "cecil_info";
    /// Cecil claims to be alright.
    pub const CECIL_ALRIGHT: &str = "cecil_alright";
    /// Cecil confesses the lost coin.
    pub const CECIL_QUEST_PROMPT: &str = "cecil_quest_prompt";
    /// Reading the bulletin board.
    pub const BULLETIN_BOARD: &str = "bulletin_board";
    /// Talking to Ephsus.
    pub const EPHSUS_INITIAL: &str = "ephsus_initial";
    /// Ephsus asks for soil.
    pub const EPHSUS_QUEST_PROMPT: &str = "ephsus_quest_prompt";
    /// Armedas's stall.
    pub const MARKET_STALL: &str = "market_stall";
    /// The black market stall, open.
    pub const BLACKEST_MARKET: &str = "blackest_market";
    /// The black market stall, closed sign.
    pub const BLACKEST_MARKET_SIGN: &str = "blackest_market_sign";
    /// Sitting with Hinter.
    pub const HINTER_PROPHECIES: &str = "hinter_prophecies";
    /// Reading the memorial plaque.
    pub const READ_PLAQUE: &str = "read_plaque";
    /// Typing a donation amount.
    pub const DONATING: &str = "donating";
    /// Talking to Creedal.
    pub const CREEDAL_TALK: &str = "creedal_talk";
    /// Creedal admits his hunger.
    pub const CREEDAL_QUEST_PROMPT: &str = "creedal_quest_prompt";
    /// Talking to Weatherbee.
    pub const WEATHERBEE_TALK: &str = "weatherbee_talk";
    /// Weatherbee needs cheering up.
    pub const WEATHERBEE_SPIRITS_PROMPT: &str = "weatherbee_spirits_prompt";
    /// Refinery hatch waiting for the ID card.
    pub const REFINERY_PROMPT: &str = "refinery_prompt";
    /// Deposit terminal waiting for the ID card.
    pub const DEPOSIT_PROMPT: &str = "deposit_prompt";
    /// At the tower terminal.
    pub const APPROACHING_TERMINAL: &str = "approaching_terminal";
}

/// Menu labels the handlers add and remove.
pub mod labels {
    /// Black market entry on the market's main menu.
    pub const BLACK_MARKET_STALL: &str = "approach Blackest of Markets stall";
    /// Coin turn-in.
    pub const OFFER_LUCKY_COIN: &str = "offer lucky coin";
    /// Buns turn-in.
    pub const OFFER_STEAMED_BUNS: &str = "offer steamed buns";
    /// Weatherbee congratulation.
    pub const CONGRATULATE: &str = "congratulations on your new job";
    /// Weatherbee mood check.
    pub const SPIRITS: &str = "hows your spirits now weatherbee";
}

/// NPC display names.
pub mod npcs {
    /// Resident of the corridor.
    pub const CECIL: &str = "Greyman Cecil";
    /// Science officer at the plaza.
    pub const EPHSUS: &str = "Science Officer Ephsus";
    /// Guard on the residential side.
    pub const CREEDAL: &str = "Security Officer Creedal";
    /// Guard on the industrial side.
    pub const WEATHERBEE: &str = "Security Officer Weatherbee";
    /// Appears at the pond after enough donations.
    pub const LONG: &str = "Colony Foreman Long";
}

/// Ids of every location, for handlers that need a specific place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Places {
    /// Starting location.
    pub quarters: LocationId,
    /// Residential Corridor.
    pub corridor: LocationId,
    /// Residential Entrance.
    pub residential_entrance: LocationId,
    /// Central Plaza.
    pub central_plaza: LocationId,
    /// Colony Market.
    pub market: LocationId,
    /// Memorial Pond.
    pub pond: LocationId,
    /// Security Checkpoint (Residential).
    pub checkpoint_residential: LocationId,
    /// Security Checkpoint (Industrial).
    pub checkpoint_industrial: LocationId,
    /// Residential Checkpoint Gate.
    pub residential_gate: LocationId,
    /// Industrial Checkpoint Gate.
    pub industrial_gate: LocationId,
    /// Industrial Plaza.
    pub industrial_plaza: LocationId,
    /// Refinery.
    pub refinery: LocationId,
    /// Mine Entrance.
    pub mine: LocationId,
    /// Deposit Station.
    pub deposit_station: LocationId,
    /// Communications Tower Entrance.
    pub tower: LocationId,
}

/// Build and validate the colony.
pub fn build_colony(catalog: &Catalog, prophecy_cost: u32) -> FictionResult<(WorldGraph, Places)> {
    let mut world = WorldGraph::new();

    let quarters = world.allocate(player_home(catalog)?)?;
    let corridor = world.allocate(residential_corridor()?)?;
    let residential_entrance = world.allocate(residential_entrance()?)?;
    let central_plaza = world.allocate(central_plaza()?)?;
    let market = world.allocate(market(prophecy_cost)?)?;
    let pond = world.allocate(memorial_pond()?)?;
    let checkpoint_residential = world.allocate(checkpoint_residential()?)?;
    let checkpoint_industrial = world.allocate(checkpoint_industrial()?)?;
    let residential_gate = world.allocate(Location::new(
        "Residential Checkpoint Gate",
        "You are in a small, sterile airlock. The blast door to the residential checkpoint \
         has closed behind you. The only way is forward into the Industrial Plaza.",
    ))?;
    let industrial_gate = world.allocate(Location::new(
        "Industrial Checkpoint Gate",
        "A small, sterile security airlock. The gate to the industrial checkpoint has closed \
         behind you. The only way is forward to the Central Plaza.",
    ))?;
    let industrial_plaza = world.ensure_singleton(Singleton::IndustrialPlaza, industrial_plaza)?;
    let refinery = world.ensure_singleton(Singleton::Refinery, refinery)?;
    let mine = world.allocate(mine_entrance(catalog)?)?;
    let deposit_station = world.allocate(deposit_station(catalog)?)?;
    let tower = world.allocate(communications_tower()?)?;

    world.connect(quarters, "residential corridor", corridor)?;
    world.connect(corridor, "your quarters", quarters)?;
    world.connect(corridor, "residential entrance", residential_entrance)?;
    world.connect(residential_entrance, "residential corridor", corridor)?;
    world.connect(residential_entrance, "central plaza", central_plaza)?;

    world.connect(central_plaza, "residential district", residential_entrance)?;
    world.connect(central_plaza, "colony market", market)?;
    world.connect(central_plaza, "memorial pond", pond)?;
    world.connect(central_plaza, "security checkpoint", checkpoint_residential)?;
    world.connect(central_plaza, "communications tower", tower)?;

    world.connect(tower, "central plaza", central_plaza)?;
    world.connect(market, "central plaza", central_plaza)?;
    world.connect(pond, "central plaza", central_plaza)?;

    world.connect(checkpoint_residential, "industrial sector", residential_gate)?;
    world.connect(checkpoint_residential, "central plaza", central_plaza)?;
    world.connect(residential_gate, "industrial plaza", industrial_plaza)?;

    world.connect(checkpoint_industrial, "residential sector", industrial_gate)?;
    world.connect(checkpoint_industrial, "industrial plaza", industrial_plaza)?;
    world.connect(industrial_gate, "central plaza", central_plaza)?;

    world.connect(industrial_plaza, "security checkpoint", checkpoint_industrial)?;
    connect_industrial_and_refinery(&mut world)?;
    world.connect_both(industrial_plaza, "mine entrance", mine, "industrial plaza")?;
    world.connect_both(
        industrial_plaza,
        "deposit station",
        deposit_station,
        "industrial plaza",
    )?;

    world.validate()?;
    tracing::info!(locations = world.len(), "colony built");

    Ok((
        world,
        Places {
            quarters,
            corridor,
            residential_entrance,
            central_plaza,
            market,
            pond,
            checkpoint_residential,
            checkpoint_industrial,
            residential_gate,
            industrial_gate,
            industrial_plaza,
            refinery,
            mine,
            deposit_station,
            tower,
        },
    ))
}

/// Wire the Industrial Plaza and Refinery to each other. Safe to repeat.
pub fn connect_industrial_and_refinery(
    world: &mut WorldGraph,
) -> FictionResult<(LocationId, LocationId)> {
    let plaza = world.ensure_singleton(Singleton::IndustrialPlaza, industrial_plaza)?;
    let refinery = world.ensure_singleton(Singleton::Refinery, refinery)?;
    world.connect_both(plaza, "refinery", refinery, "industrial plaza")?;
    Ok((plaza, refinery))
}

// ---------------------------------------------------------------------------
// Residential sector
// ---------------------------------------------------------------------------

fn player_home(catalog: &Catalog) -> CoreResult<Location> {
    let mut room = Location::new(
        "Your Quarters",
        "Your small but cozy living space in the residential sector.",
    );
    room.add_hidden_items(
        states::CUPBOARD,
        vec![catalog.require(names::ID_CARD)?, catalog.require(names::MINING_GUN)?],
    )?;
    room.add_action(MAIN_STATE, "check terminal");
    room.add_state(
        states::TERMINAL,
        &["check weekly quota", "check news", "personal information", GO_BACK],
    )?;
    room.add_child_state(
        states::PERSONAL_INFO,
        &["insert id card", GO_BACK],
        states::TERMINAL,
    )?;
    room.add_child_state(
        states::VIEWING_INFO,
        &["remove ID card and go back"],
        states::TERMINAL,
    )?;
    Ok(room)
}

fn residential_corridor() -> CoreResult<Location> {
    let mut room = Location::new(
        "Residential Corridor",
        "A long corridor connecting various living quarters.",
    );
    room.add_npc(npcs::CECIL);
    room.add_state(
        states::CECIL_TALK,
        &[
            "who is this man and why is covered in grey dust",
            "say \"you alright cecil\"",
            "leave",
        ],
    )?;
    room.add_back_state(states::CECIL_INFO, states::CECIL_TALK)?;
    room.add_child_state(
        states::CECIL_ALRIGHT,
        &["are you sure you alright?", GO_BACK],
        states::CECIL_TALK,
    )?;
    room.add_back_state(states::CECIL_QUEST_PROMPT, states::CECIL_ALRIGHT)?;
    Ok(room)
}

fn residential_entrance() -> CoreResult<Location> {
    let mut room = Location::new(
        "Residential Entrance",
        "The main entrance to the residential sector.",
    );
    room.add_state(
        states::BULLETIN_BOARD,
        &[
            "read notice about quota increase",
            "read warning about oxygen generators",
            "read recent job listings",
            "read an advert for a vendor at the market",
            "step away from bulletin board",
        ],
    )?;
    room.add_action(MAIN_STATE, "look at bulletin board");
    Ok(room)
}

// ---------------------------------------------------------------------------
// Central sector
// ---------------------------------------------------------------------------

fn central_plaza() -> CoreResult<Location> {
    let mut room = Location::new(
        "Central Plaza",
        "The heart of Colony 4B where all sectors meet. A grand open space with multiple \
         pathways.",
    );
    room.add_npc(npcs::EPHSUS);
    room.add_state(
        states::EPHSUS_INITIAL,
        &[
            "ask about thebian ground soil",
            "ask why looks like she's contemplating",
            "go back to plaza",
        ],
    )?;
    room.add_child_state(
        states::EPHSUS_QUEST_PROMPT,
        &["offer thebian ground soil", GO_BACK],
        states::EPHSUS_INITIAL,
    )?;
    Ok(room)
}

fn market(prophecy_cost: u32) -> CoreResult<Location> {
    let mut room = Location::new(
        "Colony Market",
        "A bustling marketplace where colonists trade goods and supplies.",
    );
    room.add_back_state(states::MARKET_STALL, MAIN_STATE)?;
    room.add_back_state(states::BLACKEST_MARKET, MAIN_STATE)?;
    room.add_back_state(states::BLACKEST_MARKET_SIGN, MAIN_STATE)?;
    room.add_action(MAIN_STATE, "approach Merchant Armedas stall");
    room.add_action(MAIN_STATE, labels::BLACK_MARKET_STALL);
    room.add_action(MAIN_STATE, "visit Hinter's Prophecies");
    let prophecy = format!("what should I pay my attention to? ({prophecy_cost} Minshin)");
    room.add_state(states::HINTER_PROPHECIES, &[prophecy.as_str(), "leave"])?;
    Ok(room)
}

fn memorial_pond() -> CoreResult<Location> {
    let mut room = Location::new(
        "Memorial Pond",
        "A peaceful area with a serene pond, dedicated to the colonists of 4A.",
    );
    room.add_action(MAIN_STATE, "read memorial pond plaque");
    room.add_action(MAIN_STATE, "donate minshin into donation terminal");
    room.add_back_state(states::READ_PLAQUE, MAIN_STATE)?;
    room.add_free_text_state(states::DONATING)?;
    Ok(room)
}

fn communications_tower() -> CoreResult<Location> {
    let mut room = Location::new(
        "Communications Tower Entrance",
        "The entrance to the massive communications tower. A terminal sits next to the \
         sealed doors.",
    );
    room.add_action(MAIN_STATE, "approach terminal");
    room.add_state(states::APPROACHING_TERMINAL, &["insert ID card", GO_BACK])?;
    Ok(room)
}

// ---------------------------------------------------------------------------
// Checkpoints
// ---------------------------------------------------------------------------

fn checkpoint_residential() -> CoreResult<Location> {
    let mut room = Location::new(
        "Security Checkpoint (Residential)",
        "The residential side of the heavily monitored checkpoint. A large blast door blocks \
         the way to the industrial sector. Security Officer Creedal watches you impassively. \
         The way back to the Central Plaza is open.",
    );
    room.add_npc(npcs::CREEDAL);
    room.add_state(
        states::CREEDAL_TALK,
        &[
            "ask about the industrial sector",
            "ask why creedal is drooling",
            GO_BACK,
        ],
    )?;
    room.add_child_state(
        states::CREEDAL_QUEST_PROMPT,
        &["stay strong creed", GO_BACK],
        states::CREEDAL_TALK,
    )?;
    Ok(room)
}

fn checkpoint_industrial() -> CoreResult<Location> {
    let mut room = Location::new(
        "Security Checkpoint (Industrial)",
        "The industrial side of the checkpoint. A security gate blocks the path to the \
         residential sector, watched by the stern Security Officer Weatherbee. The \
         Industrial Plaza is behind you.",
    );
    room.add_npc(npcs::WEATHERBEE);
    room.add_state(
        states::WEATHERBEE_TALK,
        &["ask about the residential sector", GO_BACK],
    )?;
    room.add_child_state(
        states::WEATHERBEE_SPIRITS_PROMPT,
        &["give weatherbee a high five", GO_BACK],
        states::WEATHERBEE_TALK,
    )?;
    Ok(room)
}

// ---------------------------------------------------------------------------
// Industrial sector
// ---------------------------------------------------------------------------

fn industrial_plaza() -> CoreResult<Location> {
    Ok(Location::new(
        "Industrial Plaza",
        "The industrial sector where mining operations are managed. The air hums with \
         machinery.",
    ))
}

fn refinery() -> CoreResult<Location> {
    let mut room = Location::new(
        "Refinery",
        "A facility for processing and refining raw materials.",
    );
    room.add_action(MAIN_STATE, "deposit non-ambrosium materials");
    room.add_action(MAIN_STATE, "view 'refinery for dummies' handbook");
    room.add_state(states::REFINERY_PROMPT, &["insert ID card", GO_BACK])?;
    Ok(room)
}

fn mine_entrance(catalog: &Catalog) -> CoreResult<Location> {
    let mut room = Location::new(
        "Mine Entrance",
        "The entrance to the Ambrosium mines. This is where you work.",
    );
    room.add_item(catalog.require(names::AMBROSIUM_CRYSTAL)?);
    room.add_action(MAIN_STATE, "mine away");
    room.add_action(MAIN_STATE, "view 'how to mine' handbook");
    Ok(room)
}

fn deposit_station(catalog: &Catalog) -> CoreResult<Location> {
    let mut room = Location::new(
        "Deposit Station",
        "A facility where miners can deposit their Ambrosium findings and receive payment.",
    );
    room.add_item(catalog.require(names::LUCKY_COIN)?);
    room.add_action(MAIN_STATE, "deposit resources");
    room.add_action(MAIN_STATE, "view 'depositing 101' handbook");
    room.add_state(states::DEPOSIT_PROMPT, &["insert ID card", GO_BACK])?;
    Ok(room)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colony() -> (WorldGraph, Places) {
        build_colony(&Catalog::standard(), 50).unwrap()
    }

    fn main_menu(world: &WorldGraph, id: LocationId) -> Vec<String> {
        world
            .location(id)
            .unwrap()
            .state(MAIN_STATE)
            .unwrap()
            .menu
            .clone()
    }

    #[test]
    fn fifteen_locations_and_valid() {
        let (world, _) = colony();
        assert_eq!(world.len(), 15);
        assert!(world.validate().is_ok());
    }

    #[test]
    fn home_menu_order() {
        let (world, places) = colony();
        assert_eq!(
            main_menu(&world, places.quarters),
            ["open cupboard", "check terminal", "go residential corridor"]
        );
    }

    #[test]
    fn home_has_single_exit() {
        let (world, places) = colony();
        let home = world.location(places.quarters).unwrap();
        assert_eq!(home.exits().len(), 1);
        assert_eq!(home.exit("residential corridor"), Some(places.corridor));
    }

    #[test]
    fn industrial_plaza_menu() {
        let (world, places) = colony();
        assert_eq!(
            main_menu(&world, places.industrial_plaza),
            [
                "go security checkpoint",
                "go refinery",
                "go mine entrance",
                "go deposit station"
            ]
        );
    }

    #[test]
    fn reconnecting_singletons_is_idempotent() {
        let (mut world, places) = colony();
        let before = main_menu(&world, places.industrial_plaza);
        let (plaza, refinery) = connect_industrial_and_refinery(&mut world).unwrap();
        assert_eq!(plaza, places.industrial_plaza);
        assert_eq!(refinery, places.refinery);
        assert_eq!(main_menu(&world, places.industrial_plaza), before);
        assert_eq!(world.len(), 15);
    }

    #[test]
    fn checkpoints_lead_to_airlocks() {
        let (world, places) = colony();
        let res = world.location(places.checkpoint_residential).unwrap();
        assert_eq!(res.exit("industrial sector"), Some(places.residential_gate));
        let ind = world.location(places.checkpoint_industrial).unwrap();
        assert_eq!(ind.exit("residential sector"), Some(places.industrial_gate));
    }

    #[test]
    fn prophecy_label_uses_price() {
        let (world, places) = build_colony(&Catalog::standard(), 75).unwrap();
        let market = world.location(places.market).unwrap();
        assert_eq!(
            market.state(states::HINTER_PROPHECIES).unwrap().menu[0],
            "what should I pay my attention to? (75 Minshin)"
        );
    }

    #[test]
    fn names_are_findable() {
        let (world, places) = colony();
        assert_eq!(world.find("mine entrance"), Some(places.mine));
        assert_eq!(
            world.find("security checkpoint (residential)"),
            Some(places.checkpoint_residential)
        );
    }
}
