//! Typed commands and the three-tier classification.

/// Multi-word commands matched against the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    /// Run the mining gun.
    MineAway,
    /// Open the donation prompt at the pond.
    DonateMinshin,
    /// Approach the Ambrosium deposit terminal.
    DepositResources,
    /// Approach the refinery hatch.
    DepositNonAmbrosium,
    /// Home terminal: quota status.
    CheckWeeklyQuota,
    /// Home terminal: news feed.
    CheckNews,
    /// Home terminal: personnel file prompt.
    PersonalInformation,
    /// Ask about Cecil's grey dust.
    AskAboutCecil,
    /// Ask whether Cecil is alright.
    AskCecilAlright,
    /// Press Cecil on whether he is alright.
    AskCecilSureAlright,
    /// Hand Cecil his coin.
    OfferLuckyCoin,
    /// Ask Ephsus about the soil.
    AskEphsusSoil,
    /// Ask Ephsus what troubles her.
    AskEphsusContemplating,
    /// Hand Ephsus soil samples.
    OfferGroundSoil,
    /// Ask Creedal about the industrial sector.
    AskCreedalIndustrial,
    /// Ask Weatherbee about the residential sector.
    AskWeatherbeeResidential,
    /// Talk to the foreman.
    TalkForemanLong,
    /// Return to the parent state.
    GoBack,
    /// Toggle debug mode.
    ToggleDebug,
    /// Sit down with Hinter.
    VisitHinter,
    /// Pay for a prophecy.
    RequestProphecy,
    /// Approach Armedas's stall.
    ApproachArmedasStall,
    /// Ask why Creedal is drooling.
    AskCreedalDrooling,
    /// Encourage Creedal.
    StayStrongCreed,
    /// Hand Creedal the buns.
    OfferSteamedBuns,
    /// Congratulate Weatherbee.
    CongratulateWeatherbee,
    /// Ask Weatherbee how he feels.
    AskWeatherbeeSpirits,
    /// High five Weatherbee.
    HighFiveWeatherbee,
    /// Approach the tower terminal.
    ApproachTowerTerminal,
    /// Insert the colony ID card at the tower.
    InsertIdCard,
    /// Insert the forged card at the tower.
    InsertTowerIdCard,
    /// Approach the black market stall.
    ApproachBlackMarket,
    /// Buy the forged card.
    BuyTowerIdCard,
    /// Buy the XL backpack.
    BuyBackpack,
    /// Buy steamed buns.
    BuyBuns,
    /// Buy the mining gun upgrade.
    BuyGunUpgrade,
    /// Read the mining handbook.
    MiningHandbook,
    /// Read the refinery handbook.
    RefineryHandbook,
    /// Read the deposit handbook.
    DepositHandbook,
}

const EXACT_PHRASES: &[(&str, Phrase)] = &[
    ("MINE AWAY", Phrase::MineAway),
    ("DONATE MINSHIN INTO DONATION TERMINAL", Phrase::DonateMinshin),
    ("DEPOSIT RESOURCES", Phrase::DepositResources),
    ("DEPOSIT NON-AMBROSIUM MATERIALS", Phrase::DepositNonAmbrosium),
    ("CHECK WEEKLY QUOTA", Phrase::CheckWeeklyQuota),
    ("CHECK NEWS", Phrase::CheckNews),
    ("PERSONAL INFORMATION", Phrase::PersonalInformation),
    (
        "WHO IS THIS MAN AND WHY IS COVERED IN GREY DUST",
        Phrase::AskAboutCecil,
    ),
    ("SAY \"YOU ALRIGHT CECIL\"", Phrase::AskCecilAlright),
    ("ARE YOU SURE YOU ALRIGHT?", Phrase::AskCecilSureAlright),
    ("OFFER LUCKY COIN", Phrase::OfferLuckyCoin),
    ("ASK ABOUT THEBIAN GROUND SOIL", Phrase::AskEphsusSoil),
    (
        "ASK WHY LOOKS LIKE SHE'S CONTEMPLATING",
        Phrase::AskEphsusContemplating,
    ),
    ("OFFER THEBIAN GROUND SOIL", Phrase::OfferGroundSoil),
    ("ASK ABOUT THE INDUSTRIAL SECTOR", Phrase::AskCreedalIndustrial),
    ("ASK ABOUT THE RESIDENTIAL SECTOR", Phrase::AskWeatherbeeResidential),
    ("TALK TO COLONY FOREMAN LONG", Phrase::TalkForemanLong),
    ("GO BACK", Phrase::GoBack),
    ("LEAVE", Phrase::GoBack),
    ("STEP AWAY", Phrase::GoBack),
    ("STEP AWAY FROM BULLETIN BOARD", Phrase::GoBack),
    ("GO BACK TO PLAZA", Phrase::GoBack),
    ("REMOVE ID CARD AND GO BACK", Phrase::GoBack),
    ("DEBUGMODE", Phrase::ToggleDebug),
    ("VISIT HINTER'S PROPHECIES", Phrase::VisitHinter),
    ("APPROACH MERCHANT ARMEDAS STALL", Phrase::ApproachArmedasStall),
    ("ASK WHY CREEDAL IS DROOLING", Phrase::AskCreedalDrooling),
    ("STAY STRONG CREED", Phrase::StayStrongCreed),
    ("OFFER STEAMED BUNS", Phrase::OfferSteamedBuns),
    ("CONGRATULATIONS ON YOUR NEW JOB", Phrase::CongratulateWeatherbee),
    ("HOWS YOUR SPIRITS NOW WEATHERBEE", Phrase::AskWeatherbeeSpirits),
    ("GIVE WEATHERBEE A HIGH FIVE", Phrase::HighFiveWeatherbee),
    ("APPROACH TERMINAL", Phrase::ApproachTowerTerminal),
    ("INSERT ID CARD", Phrase::InsertIdCard),
    ("INSERT COMMUNICATIONS TOWER ID CARD", Phrase::InsertTowerIdCard),
    ("APPROACH BLACKEST OF MARKETS STALL", Phrase::ApproachBlackMarket),
    ("VIEW 'HOW TO MINE' HANDBOOK", Phrase::MiningHandbook),
    ("VIEW 'REFINERY FOR DUMMIES' HANDBOOK", Phrase::RefineryHandbook),
    ("VIEW 'DEPOSITING 101' HANDBOOK", Phrase::DepositHandbook),
];

/// Phrases whose tail carries a configurable price.
const PREFIX_PHRASES: &[(&str, Phrase)] = &[
    ("BUY OLYMPUS XL BACKPACK", Phrase::BuyBackpack),
    ("BUY STEAMED BUNS", Phrase::BuyBuns),
    ("BUY HEAVY BEAM MINING GUN UPGRADE", Phrase::BuyGunUpgrade),
    ("BUY COMMUNICATIONS TOWER ID CARD", Phrase::BuyTowerIdCard),
    ("WHAT SHOULD I PAY MY ATTENTION TO?", Phrase::RequestProphecy),
];

impl Phrase {
    /// Match uppercase text exactly, then by prefix.
    pub fn parse(text: &str) -> Option<Self> {
        EXACT_PHRASES
            .iter()
            .find(|(p, _)| *p == text)
            .or_else(|| PREFIX_PHRASES.iter().find(|(p, _)| text.starts_with(p)))
            .map(|(_, phrase)| *phrase)
    }
}

/// Single-word commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Travel.
    Go,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Look at something.
    Look,
    /// Start a conversation.
    Talk,
    /// Insert a card.
    Insert,
    /// Investigate something.
    Investigate,
    /// Check a device.
    Check,
    /// Read a notice or plaque.
    Read,
    /// Donation hint.
    Donate,
    /// Show the inventory.
    Inventory,
    /// Open a container.
    Open,
    /// Show the map.
    Map,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
    /// Debug tooling.
    Debug,
}

impl Verb {
    /// Parse an uppercase verb.
    pub fn parse(word: &str) -> Option<Self> {
        Some(match word {
            "GO" => Self::Go,
            "TAKE" => Self::Take,
            "DROP" => Self::Drop,
            "LOOK" => Self::Look,
            "TALK" => Self::Talk,
            "INSERT" => Self::Insert,
            "INVESTIGATE" => Self::Investigate,
            "CHECK" => Self::Check,
            "READ" => Self::Read,
            "DONATE" => Self::Donate,
            "INVENTORY" => Self::Inventory,
            "OPEN" => Self::Open,
            "MAP" => Self::Map,
            "HELP" => Self::Help,
            "QUIT" => Self::Quit,
            "DEBUG" => Self::Debug,
            _ => return None,
        })
    }

    /// Verbs that keep working inside free-text prompts.
    pub fn bypasses_free_text(self) -> bool {
        matches!(
            self,
            Self::Quit | Self::Help | Self::Map | Self::Debug | Self::Inventory
        )
    }
}

/// A classified player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A fixed multi-word phrase.
    Phrase {
        /// Which phrase.
        phrase: Phrase,
        /// The full uppercase text.
        text: String,
    },
    /// A verb with its argument.
    Verb {
        /// The verb.
        verb: Verb,
        /// The rest of the input, case preserved.
        argument: String,
    },
    /// Raw text for a free-text prompt.
    FreeText {
        /// Input as typed.
        input: String,
    },
    /// Nothing matched.
    Unknown {
        /// The full uppercase text.
        text: String,
    },
}

impl Command {
    /// Reclassify a phrase's text as a plain verb command.
    ///
    /// Used when a phrase handler declines outside its own location, so the
    /// generic verb handler gets a chance at the same input.
    pub fn verb_fallback(&self) -> Self {
        let text = match self {
            Self::Phrase { text, .. } | Self::Unknown { text } => text.as_str(),
            Self::FreeText { input } => input.as_str(),
            Self::Verb { .. } => return self.clone(),
        };
        let (word, rest) = text.split_once(' ').unwrap_or((text, ""));
        match Verb::parse(&word.to_uppercase()) {
            Some(verb) => Self::Verb {
                verb,
                argument: rest.trim().to_string(),
            },
            None => Self::Unknown {
                text: text.to_uppercase(),
            },
        }
    }

    /// Full uppercase text of the command, for messages and logs.
    pub fn text(&self) -> String {
        match self {
            Self::Phrase { text, .. } | Self::Unknown { text } => text.clone(),
            Self::FreeText { input } => input.to_uppercase(),
            Self::Verb { verb, argument } => {
                let word = format!("{verb:?}").to_uppercase();
                if argument.is_empty() {
                    word
                } else {
                    format!("{word} {}", argument.to_uppercase())
                }
            }
        }
    }
}

/// Classify a resolved `(verb, argument)` pair.
///
/// Order: exact phrase, priced phrase by prefix, single verb, unknown.
pub fn parse_command(verb: &str, argument: &str) -> Command {
    let verb = verb.trim().to_uppercase();
    let argument = argument.trim();
    let text = if argument.is_empty() {
        verb.clone()
    } else {
        format!("{verb} {}", argument.to_uppercase())
    };

    if let Some(phrase) = Phrase::parse(&text) {
        return Command::Phrase { phrase, text };
    }
    match Verb::parse(&verb) {
        Some(verb) => Command::Verb {
            verb,
            argument: argument.to_string(),
        },
        None => Command::Unknown { text },
    }
}
