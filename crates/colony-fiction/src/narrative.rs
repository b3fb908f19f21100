//! Static story text: endings, appreciation speeches, notices and help.

/// Shown by `help`.
pub const HELP_TEXT: &str = "Primary Commands:
- go <location>: Move to another location (e.g., 'go central plaza').
- take <item>: Pick up an item (e.g., 'take ID card').
- drop <item>: Drop an item from your inventory.
- inventory: Check your inventory.
- quit: Exit the game.
- map: Display the colony map.

Contextual Actions:
The game will also present you with numbered options for specific interactions like
talking to people or looking at objects. Type the number to perform the action.";

/// Printed when the player leaves early.
pub const FAREWELL: &str = "Exiting game. Thank you for playing!";

/// Introduction lines as `(text, per-character delay, pause after)`.
pub const INTRO: &[(&str, f64, f64)] = &[
    ("INITIALIZING COLONY DATABASE...", 0.05, 1.0),
    ("ACCESS GRANTED", 0.05, 1.0),
    ("LOADING PERSONNEL FILE...", 0.05, 2.0),
    ("", 0.0, 0.5),
    ("+------------------------------------+", 0.02, 0.1),
    ("|  [OLYMPUS RESOURCES CONFIDENTIAL]  |", 0.02, 0.1),
    ("+------------------------------------+", 0.02, 0.5),
    ("[TERMINAL ACCESS: COLONY 4B]", 0.03, 1.0),
    ("[DATE: THEBIAN YEAR 97 POST-ESTABLISHMENT]", 0.03, 1.5),
    ("", 0.0, 0.5),
    ("ACCESSING COLONY HISTORY...", 0.05, 1.0),
    ("", 0.0, 0.2),
    ("+---------------------------+", 0.02, 0.1),
    ("|  RELEVANT COLONY HISTORY  |", 0.02, 0.1),
    ("+---------------------------+", 0.02, 1.0),
    (
        "The surface of Thebes is a wasteland, battered year-round by relentless, choking dust \
         storms that make life above ground impossible. But beneath its hostile exterior, deep \
         mineral scans revealed enormous underground deposits, most importantly, Ambrosium, the \
         critical element behind Olympus Resources' flagship product: the \"Olympians,\" a line \
         of artificial humans that revolutionise industry",
        0.0,
        0.1,
    ),
    (
        "After a brutal corporate bidding war, Olympus Resources won the extraction rights and \
         dispatched teams of miners to establish fully underground colonies, each built to \
         survive in isolation with their own oxygen generation systems and internal currency, \
         the Minshin. Life in these colonies is strictly controlled; the only link to the outside \
         world is a heavily guarded communications tower, operated exclusively by Olympus \
         Resources' senior staff. When Mining Colony 4A suffered a catastrophic collapse, Olympus \
         sent in a replacement team, founding Colony 4B.",
        0.0,
        1.5,
    ),
    ("", 0.0, 0.5),
    ("+------------------+", 0.02, 0.1),
    ("|  CURRENT STATUS  |", 0.02, 0.1),
    ("+------------------+", 0.02, 1.0),
    ("Colony 4A: [TERMINATED - CATASTROPHIC STRUCTURAL FAILURE]", 0.03, 1.0),
    ("Colony 4B: [ACTIVE - CURRENT LOCATION]", 0.03, 2.0),
    ("", 0.0, 0.5),
    ("+------------------+", 0.02, 0.1),
    ("|  PERSONNEL FILE  |", 0.02, 0.1),
    ("+------------------+", 0.02, 1.0),
    ("NAME: MARMORIS GOLD", 0.0, 0.2),
    ("YEARS SERVED: 97", 0.0, 0.2),
    ("POSITION: AMBROSIUM MINER", 0.0, 0.2),
    ("STATUS: ACTIVE", 0.0, 1.5),
    ("", 0.0, 0.5),
    ("+---------------------------+", 0.02, 0.1),
    ("|  NOTICE TO ALL PERSONNEL  |", 0.02, 0.1),
    ("+---------------------------+", 0.02, 1.0),
    ("*****************************************", 0.02, 0.1),
    ("*  [!] MANDATORY QUOTA REMINDER [!]   *", 0.02, 0.1),
    ("*****************************************", 0.02, 1.0),
    ("", 0.0, 0.5),
];

/// Quota reminder closing the introduction.
pub fn intro_quota_notice(quota: u32, days: u32) -> [String; 2] {
    [
        format!("Required Deposit: {quota} Ambrosium crystals / {days} Thebian days"),
        "Failure to meet quota will result in immediate contract termination and deportation."
            .to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Endings
// ---------------------------------------------------------------------------

/// Every quest finished.
pub const GOOD_ENDING: &[&str] = &[
    "After earning the respect and trust of members of Colony 4B, your influence cannot be \
     ignored. On the morning of the subsequent day, Foreman Long gathers the entire colony. To \
     everyone's surprise, he stands beside you.",
    "\"This colony survives because we work together. From today, we are co-foremen.\"",
    "With your leadership, the colony turns its focus from mere survival to real independence. \
     Investigations into the recent mass oxygen generators failures and the discovery of a \
     skeleton from the buried Colony 4A reveal the truth: Olympus Resources sealed 4A to crush \
     a rebellion, then covered up the atrocity.",
    "Determined not to share the same fate, you and Long unite the colony behind a new plan. \
     Every quota is met to avoid suspicion, but all political orders from Olympus Resources are \
     quietly ignored. Work begins to overhaul the oxygen system: mass generator repairs, and, \
     with Ephsus's help, the planting of hardy engineered crops grown from a single dormant seed \
     found in one of her soil audits. Cecil, once a clagnum miner, becomes the colony's first \
     gardener.",
    "The communications tower, once the symbol of control, is bypassed entirely. When security \
     finally intervenes, it's just two guards and a Deportation Officer. Outnumbered and unsure, \
     they are simply invited into the new, self-governing society.",
    "Centuries pass. Five hundred Thebian years after your promotion to leadership, the last \
     oxygen generator is dismantled. The air is now rich with the breath of green life, and the \
     colony's fields and gardens thrive. Olympus Resources continues to receive its regular \
     shipments of Ambrosium, unaware that Colony 4B has quietly slipped its leash and built a \
     future of its own making.",
    "This colony is free, not by force, but by unity.",
];

/// The quota was missed.
pub const DEPORTATION_ENDING: &[&str] = &[
    "Deportation Officer Grove approaches you.",
    "",
    "\"Marmoris Gold?\" he asks, his voice devoid of emotion.",
    "",
    "\"Yes,\" you respond quietly.",
    "",
    "\"Come with me.\" He extends an arm, guiding you toward the communications tower. Walking \
     in to the lobby of the communications tower it seems surprisingly empty. The guards step \
     aside as you're led inside, their eyes carefully avoiding yours. You enter what appears to \
     be a completely bare room, and Grove takes position behind you.",
    "Standing tall with your 97 Thebian years of service, you feel prepared for whatever comes \
     next. Security officers lay a human-shaped bag in front of you, decorated with Olympus \
     Resources logos. One label in particular catches your eye: \"Please input all required \
     information before submitting items for cremation.\"",
    "You feel something hard and cold pressed against the back of your head.",
];

/// Quota met, quests unfinished.
pub const AVERAGE_WORKER_ENDING: &[&str] = &[
    "The three day cycle is up.",
    "Please check you personal terminal for updates regarding qoutas, news and more for the \
     next cycle.",
    "'together we are strong' - Olympus Rescouces",
];

/// The skeleton surfaced in the mines.
pub const SKELETON_ENDING: &[&str] = &[
    "The bones surface from the dirt, scattered across the mining floor. Your cry of alarm \
     draws the other miners, and together you stare at the remains. Forensic analysis identifies \
     the skeleton as Flek, an Ambrosium miner from Colony 4A. Flek was found with a bullet hole \
     in their skull. The remains of the bullet was positively matched to standard Olympus \
     Resources enforcer rounds.",
    "Word spreads fast. Fueled by anger and fear, Colony 4B storms the communications tower. \
     The two security officers behind the entrance fall with minimal resistance, but the lobby \
     is nearly empty, just a single Deportation Officer, who swears the two guards were the only \
     ones ever stationed there. Under questioning, Grove reveals that all directives arrive \
     through a lobby terminal, the same one Foreman Long uses to receive his political \
     directives. There is no access to the upper disk where the \"communications team\" \
     supposedly works.",
    "The search of the lobby turns up nothing but cremation bags, a crude reality to the \
     \"deportation\", as well as no evidence of real communication with the outside. A desperate \
     attempt to break into the upper levels finds only empty rooms lined with silent terminals, \
     all set to auto-send reports to company headquarters.",
    "Hacking these advanced terminals finally exposes the truth: Colony 4A attempted rebellion, \
     initially for increased salary and better working conditions, but they discovered the \
     reality behind deportation. Olympus Resources responded with riot suppression. When that \
     failed, they sealed the colony. There was no collapse, it was an mass execution.",
    "Worse, the archived data reveals a final betrayal to ensure that a riot will never happen \
     again. All oxygen generators are programmed with a 100-year lifespan, to be switched off as \
     a \"cost-effective\" measure. For Colony 4B, that means three years remain before the air \
     runs out, no matter what you do.",
    "You stand with your fellow miners, silent in the knowledge that death was always \
     inevitable.",
];

// ---------------------------------------------------------------------------
// Appreciation speeches
// ---------------------------------------------------------------------------

/// Foreman Long's thanks.
pub const FOREMAN_THANKS: &str = "Marmoris my dear boy. You have donated more Minshin for the \
     upkeep of our colony that I could count! I just wanted to swing by and give my thanks. We \
     could be great together you know.";

/// Ephsus's thanks.
pub const EPHSUS_THANKS: &str = "You may have just saved my skin marmoris! With these samples I \
     can get my audit in tip top shape. I could even do a soil acidity test, or maybe even an \
     enzyme assay... YAHOO!";

/// Cecil's thanks.
pub const CECIL_THANKS: &str = "Cecil takes a knee as he clutches the coin in hand. Raising his \
     head he is brandishing a smile that has twisted his face out of proportion. 'You have made \
     this poor greyman so damn happy'";

/// Creedal's thanks.
pub const CREEDAL_THANKS: &str =
    "\"Woah. These look incredible...\" \"Delicious!\" He seemed to be completely mesmerised.";

/// Weatherbee's thanks.
pub const WEATHERBEE_THANKS: &str = "Weatherbee's spirits became noticeably more optimistic. He \
     repositioned himself on his chair so he sat tall, brandished a smile and wide optimistic \
     eyes. \"good for him\" you think to yourself.";

// ---------------------------------------------------------------------------
// Dialogue
// ---------------------------------------------------------------------------

/// About Cecil's grey dust.
pub const CECIL_INFO: &str = "Cecil is a Clagnum Miner who extracts Clagnum suspended in grey \
     dust using extractor guns. Unlike the putty form you have seen, this variant coats him \
     entirely, hence the name \"Greyman.\".";

/// Cecil's brave face.
pub const CECIL_ALRIGHT: &str = "Cecil brandishes a weak smile, although the tear stains through \
     the dirt encrusted on his face does not fool you. This is the worse job. Thank god you got \
     the promotion to Ambrosium miner.";

/// Cecil's confession.
pub const CECIL_LOST_COIN: &str = "I know this sound stupid *sob* but I lost my lucky coin in \
     the industrial sector. I have no clue where it is *sob*. Its my only reminder of home \
     *much larger sob*";

/// Ephsus on the soil.
pub const EPHSUS_SOIL: &str = "Thebian ground soil is packed with an extensive foundation. The \
     soil has derived from the incredible pressures and tubidation by external weather \
     conditions combined with whatever originated from Thebes's lqiuid metal core. Another \
     science officer found dormant seeds waiting for the right conditions to sprout. There \
     hasn't been sufficient water on Thebes for thousands of years! how exciting, maybe non \
     human multicellular life can thrive?..";

/// Creedal on the industrial sector.
pub const CREEDAL_INDUSTRIAL: &str =
    "'Just the usual grind. Miners in, resources out. Don't cause any trouble.'";

/// Creedal's hunger.
pub const CREEDAL_HUNGRY: &str = "\"I'm just so hungry...\"
*Creedal slumps into himself and then sits upright violently when he realises he may be coming off as unprofessional*
\"Must stay on duty.\"
*Creedal is clearly having an internal conflict*
\"Some steamed buns would be delicious about now...\"";

/// Weatherbee on the residential sector.
pub const WEATHERBEE_RESIDENTIAL: &str =
    "'It's quiet. Too quiet. Just make sure you meet your quota.'";

/// Weatherbee hears the congratulations.
pub const WEATHERBEE_GIDDY: &str = "Weatherbee became giddy with the congratulations. \"Thank \
     you, thank you. The mines were too much for me. Truth is I enjoy sitting all day. I have so \
     much time to think about whats outside, what I should do today, you get it. I would always \
     get so demoralised leaving the mines at 15:00. Hopefully my spirits are good whilst im \
     here!\"";

/// Weatherbee during the afternoon slump.
pub const WEATHERBEE_SLUMP: &str =
    "\"Not good. Some support would be good here. A crisp high five wouldn't go a miss.\"";

// ---------------------------------------------------------------------------
// Notices, terminals and handbooks
// ---------------------------------------------------------------------------

/// News feed on the home terminal.
pub const TERMINAL_NEWS: &str = "Terminal News Feed: \"Olympus Resources stock up 5% after \
     successful Ambrosium extraction report from colonies 4B, 5C and 6A. Annual bonus upped to \
     potentially 100,000 Minshin.\"";

/// Bulletin: quota increase.
pub const NOTICE_QUOTA: &str = "[NOTICE] Effective next cycle, the weekly Ambrosium quota will \
     be raised to 25 crystals. Service to Olympus is paramount.";

/// Bulletin: oxygen generators.
pub const NOTICE_OXYGEN: &str = "[WARNING] Reports of generator malfunctions have increased by \
     32% in the past month. \"all is well, its just a case of routine repairs\" Says Colony \
     Foreman Long .";

/// Bulletin: job listing naming Weatherbee.
pub const NOTICE_JOBS: &str = "[AD] The recent vacancy for SECURITY CHECKPOINT OFFICER \
     (INDUSTRIAL) (FULL TIME) has been filled by a Mr. Weatherbee. All subsequent applications \
     will be ignored.";

/// Bulletin: market advert.
pub const NOTICE_ADVERT: &str = "+-------------------------------------------------+
|                                                 |
|               ** ARMEDAS STALL **               |
|                                                 |
|      \"Come here come here to Armeda's stall!\"   |
|                                                 |
|   Tired of your old clunker? We got...          |
|   >>> HEAVY BEAM MINING GUN UPGRADES! <<<       |
|         *Make your mining sweeter!*             |
|                                                 |
|   Running out of space? Check out our...        |
|   >>> OLYMPUS XL BACKPACKS! <<<                 |
|                                                 |
|   Hungry? We have...                            |
|   >>> DELICIOUS STEAMED BUNS! <<<               |
|         *Caters for all your needs!*            |
|                                                 |
+-------------------------------------------------+";

/// Memorial plaque.
pub const PLAQUE: &str = "The plaque is cold to the touch. It reads: 'In memory of Colony 4A. \
     May their memory pave the way for a prosperous future under the guidance of Olympus.'";

/// Mining handbook.
pub const HANDBOOK_MINING: &str = "Rule number 1. Make sure you have your mining gun. Once \
     equipped mine away and you will recieve a variety of minerals based on your luck. Happy \
     mining";

/// Refinery handbook.
pub const HANDBOOK_REFINERY: &str = "The refinery is for NON-AMBROSIUM materials only. All you \
     gotta do is insert your ID card and then deposit all your materials and the refinery will \
     do the rest. Give it a minute and then your payment will be appended to the ID card.";

/// Deposit station handbook.
pub const HANDBOOK_DEPOSIT: &str = "Just insert your ID card and deposit all your ambrosium from \
     this day's haul. Allow the machine to do its analysis and then make sure to remove your \
     card once you get the all clear.";

/// Hinter's greeting.
pub const HINTER_GREETING: &str = "An old woman sits in a dimly lit corner, her eyes clouded but \
     focused on you. 'The threads of fate are tangled,' she rasps. 'What is it you wish to \
     know?'";

/// Black market sign before it opens.
pub const BLACK_MARKET_SIGN: &str = "The stall is closed, with a sign reading: 'Coming soon, \
     Blackest of Markets, where you can find all your totally legal *wink* items.'";

/// Foreman Long arrives at the pond.
pub const FOREMAN_ARRIVES: &str = "A man with a stern but weary face, wearing a foreman's \
     jacket, has appeared by the pond. He nods at you.";
