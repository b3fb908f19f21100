//! Tunable game constants.
//!
//! Every number the engine uses (prices, thresholds, the quota, facility
//! hours) lives here so it can be overridden from a JSON file. Missing keys
//! fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Upper bound for prices, payout rates and weights.
pub const MAX_AMOUNT: u32 = 1_000_000;

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for mining draws and prophecies.
    pub seed: u64,
    /// Player first name.
    pub player_name: String,
    /// Minshin at game start.
    pub initial_minshin: u32,
    /// Inventory slots before the backpack upgrade.
    pub inventory_capacity: usize,
    /// Inventory slots after the backpack upgrade.
    pub upgraded_inventory_capacity: usize,
    /// Maximum count of one resource in the inventory.
    pub max_resource_stack: usize,
    /// Ambrosium needed before the play period ends.
    pub ambrosium_quota: u32,
    /// Days in one quota period.
    pub quota_period_days: u32,
    /// Hours per day.
    pub day_length: f64,
    /// Hour at which the mines and industrial facilities close.
    pub facility_close_hour: f64,
    /// Hour at which the industrial facilities reopen.
    pub facility_open_hour: f64,
    /// Hours consumed by a successful move.
    pub travel_hours: f64,
    /// Hours consumed by one mining run.
    pub mining_hours: f64,
    /// Hours consumed by a deposit at a terminal.
    pub deposit_hours: f64,
    /// Total donations that summon the foreman.
    pub foreman_spawn_threshold: u32,
    /// Smallest accepted donation.
    pub minimum_donation: u32,
    /// Price of one prophecy.
    pub prophecy_cost: u32,
    /// Soil samples Ephsus needs.
    pub soil_samples_required: u32,
    /// Price of the XL backpack.
    pub backpack_price: u32,
    /// Price of the steamed buns.
    pub steamed_buns_price: u32,
    /// Price of the mining gun upgrade.
    pub mining_upgrade_price: u32,
    /// Price of the forged tower card.
    pub black_market_card_price: u32,
    /// First day the black market stall opens.
    pub black_market_open_day: u32,
    /// Refinery payout per soil sample.
    pub soil_sell_price: u32,
    /// Refinery payout per clagnum putty.
    pub clagnum_sell_price: u32,
    /// Refinery payout per matterstone ore.
    pub matterstone_sell_price: u32,
    /// Mining attempts before the skeleton can surface.
    pub skeleton_discovery_threshold: u32,
    /// Chance per attempt of finding the skeleton once past the threshold.
    pub skeleton_discovery_chance: f64,
    /// Quota weight of one Ambrosium cluster.
    pub ambrosium_cluster_value: u32,
    /// Minshin per weighted Ambrosium unit once the quota is met.
    pub minshin_per_ambrosium_post_quota: u32,
    /// Draws per mining run with the upgraded gun.
    pub upgraded_mining_yield: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_name: "Marmoris".to_string(),
            initial_minshin: 50,
            inventory_capacity: 10,
            upgraded_inventory_capacity: 20,
            max_resource_stack: 10,
            ambrosium_quota: 20,
            quota_period_days: 3,
            day_length: 20.0,
            facility_close_hour: 15.0,
            facility_open_hour: 20.0,
            travel_hours: 0.5,
            mining_hours: 0.5,
            deposit_hours: 0.5,
            foreman_spawn_threshold: 200,
            minimum_donation: 10,
            prophecy_cost: 50,
            soil_samples_required: 10,
            backpack_price: 500,
            steamed_buns_price: 150,
            mining_upgrade_price: 1500,
            black_market_card_price: 4000,
            black_market_open_day: 1,
            soil_sell_price: 10,
            clagnum_sell_price: 50,
            matterstone_sell_price: 100,
            skeleton_discovery_threshold: 40,
            skeleton_discovery_chance: 0.5,
            ambrosium_cluster_value: 5,
            minshin_per_ambrosium_post_quota: 250,
            upgraded_mining_yield: 3,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the Ambrosium quota.
    pub fn with_quota(mut self, quota: u32) -> Self {
        self.ambrosium_quota = quota;
        self
    }

    /// Set the starting Minshin.
    pub fn with_initial_minshin(mut self, minshin: u32) -> Self {
        self.initial_minshin = minshin;
        self
    }

    /// Set the skeleton discovery chance (clamped to 0.0-1.0).
    pub fn with_skeleton_chance(mut self, chance: f64) -> Self {
        self.skeleton_discovery_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Check that the values are mutually consistent.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.day_length.is_finite() || self.day_length <= 0.0 {
            return Err(CoreError::Config(format!(
                "day_length must be positive, got {}",
                self.day_length
            )));
        }
        if !(0.0..=self.facility_open_hour).contains(&self.facility_close_hour)
            || self.facility_open_hour > self.day_length
        {
            return Err(CoreError::Config(format!(
                "facility hours {}..{} must lie within a {}-hour day",
                self.facility_close_hour, self.facility_open_hour, self.day_length
            )));
        }
        for (name, hours) in [
            ("travel_hours", self.travel_hours),
            ("mining_hours", self.mining_hours),
            ("deposit_hours", self.deposit_hours),
        ] {
            if !hours.is_finite() || hours < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be non-negative, got {hours}"
                )));
            }
        }
        if self.inventory_capacity == 0
            || self.upgraded_inventory_capacity < self.inventory_capacity
        {
            return Err(CoreError::Config(
                "inventory capacities must be positive and the upgrade must not shrink it"
                    .to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.skeleton_discovery_chance) {
            return Err(CoreError::Config(format!(
                "skeleton_discovery_chance must be within 0..1, got {}",
                self.skeleton_discovery_chance
            )));
        }
        for (name, amount) in [
            ("initial_minshin", self.initial_minshin),
            ("prophecy_cost", self.prophecy_cost),
            ("backpack_price", self.backpack_price),
            ("steamed_buns_price", self.steamed_buns_price),
            ("mining_upgrade_price", self.mining_upgrade_price),
            ("black_market_card_price", self.black_market_card_price),
            ("soil_sell_price", self.soil_sell_price),
            ("clagnum_sell_price", self.clagnum_sell_price),
            ("matterstone_sell_price", self.matterstone_sell_price),
            ("ambrosium_cluster_value", self.ambrosium_cluster_value),
            (
                "minshin_per_ambrosium_post_quota",
                self.minshin_per_ambrosium_post_quota,
            ),
            ("upgraded_mining_yield", self.upgraded_mining_yield),
        ] {
            if amount > MAX_AMOUNT {
                return Err(CoreError::Config(format!(
                    "{name} must be at most {MAX_AMOUNT}, got {amount}"
                )));
            }
        }
        if self.player_name.trim().is_empty() {
            return Err(CoreError::Config("player_name must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.initial_minshin, 50);
        assert_eq!(cfg.ambrosium_quota, 20);
        assert_eq!(cfg.quota_period_days, 3);
        assert_eq!(cfg.day_length, 20.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_quota(5)
            .with_initial_minshin(9000);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.ambrosium_quota, 5);
        assert_eq!(cfg.initial_minshin, 9000);
    }

    #[test]
    fn skeleton_chance_clamped() {
        assert_eq!(
            GameConfig::default().with_skeleton_chance(3.0).skeleton_discovery_chance,
            1.0
        );
        assert_eq!(
            GameConfig::default().with_skeleton_chance(-1.0).skeleton_discovery_chance,
            0.0
        );
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = GameConfig::from_json_str(r#"{ "seed": 9, "backpack_price": 10 }"#).unwrap();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.backpack_price, 10);
        assert_eq!(cfg.steamed_buns_price, 150);
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn inconsistent_hours_rejected() {
        let result = GameConfig::from_json_str(r#"{ "facility_close_hour": 21.0 }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn oversized_rates_rejected() {
        let result = GameConfig::from_json_str(
            r#"{ "minshin_per_ambrosium_post_quota": 4000000000 }"#,
        );
        assert!(matches!(result, Err(CoreError::Config(msg)) if msg.contains("at most")));
        assert!(GameConfig::from_json_str(r#"{ "backpack_price": 1000000 }"#).is_ok());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("colony.json");
        std::fs::write(&path, r#"{ "ambrosium_quota": 3 }"#).unwrap();
        let cfg = GameConfig::from_path(&path).unwrap();
        assert_eq!(cfg.ambrosium_quota, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = GameConfig::from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
