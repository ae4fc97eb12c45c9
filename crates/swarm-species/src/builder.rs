//! Fluent construction of a [`SwarmConfig`].
//!
//! # Usage
//!
//! ```rust
//! use swarm_core::Vec3;
//! use swarm_species::{InteractionRule, SpeciesDefinition, SpeciesSetup, SwarmConfigBuilder};
//!
//! let mut b = SwarmConfigBuilder::new();
//! let bird = b.add_template(SpeciesDefinition::new("bird", 6.0));
//!
//! let flock = InteractionRule {
//!     separation_radius: 1.0,
//!     flocking_radius:   4.0,
//!     separation_weight: 1.5,
//!     alignment_weight:  1.0,
//!     cohesion_weight:   1.0,
//! };
//! b.add_species(
//!     SpeciesSetup::new(Some(bird), 500)
//!         .spawn_sphere(Vec3::ZERO, 10.0)
//!         .initial_speed(2.0)
//!         .rule_toward(0, flock),
//! );
//!
//! let config = b.build().unwrap();
//! assert_eq!(config.species_count(), 1);
//! assert_eq!(config.total_population(), 500);
//! ```
//!
//! # Rule rows
//!
//! Each species carries one rule per *target* species, by position.  Rows
//! that are shorter than the final species count are padded with
//! [`InteractionRule::NONE`]; longer rows are truncated.  Authoring tools can
//! therefore add or remove species without hand-editing every row.

use swarm_core::{SpeciesId, TemplateId, Vec3};

use crate::{
    GlobalSettings, InteractionMatrix, InteractionRule, SpeciesDefinition, SpeciesError,
    SpeciesResult, SpeciesSpawnConfig, SwarmConfig,
};

// ── SpeciesSetup ──────────────────────────────────────────────────────────────

/// Authoring-side description of one species.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeciesSetup {
    pub template: Option<TemplateId>,
    pub count: u32,
    pub initial_random_velocity: f32,
    pub spawn_radius: f32,
    pub spawn_center: Vec3,
    /// `rules[t]` is how this species reacts to species `t`.
    pub rules: Vec<InteractionRule>,
}

impl SpeciesSetup {
    pub fn new(template: Option<TemplateId>, count: u32) -> Self {
        Self { template, count, ..Self::default() }
    }

    pub fn spawn_sphere(mut self, center: Vec3, radius: f32) -> Self {
        self.spawn_center = center;
        self.spawn_radius = radius;
        self
    }

    pub fn initial_speed(mut self, speed: f32) -> Self {
        self.initial_random_velocity = speed;
        self
    }

    /// Set the rule toward species index `target`, growing the row if needed.
    pub fn rule_toward(mut self, target: usize, rule: InteractionRule) -> Self {
        if self.rules.len() <= target {
            self.rules.resize(target + 1, InteractionRule::NONE);
        }
        self.rules[target] = rule;
        self
    }
}

// ── SwarmConfigBuilder ────────────────────────────────────────────────────────

/// Builder for [`SwarmConfig`].
#[derive(Default)]
pub struct SwarmConfigBuilder {
    templates: Vec<SpeciesDefinition>,
    species:   Vec<SpeciesSetup>,
}

impl SwarmConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template and return its id.
    pub fn add_template(&mut self, definition: SpeciesDefinition) -> TemplateId {
        let id = TemplateId(self.templates.len() as u16);
        self.templates.push(definition);
        id
    }

    /// Append a species.  Its index is the order of `add_species` calls.
    pub fn add_species(&mut self, setup: SpeciesSetup) -> SpeciesId {
        let id = SpeciesId(self.species.len() as u16);
        self.species.push(setup);
        id
    }

    /// Number of species added so far.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Validate, normalise rule rows, and flatten into a [`SwarmConfig`].
    ///
    /// A species with a missing or out-of-range template is kept so that
    /// matrix indices stay aligned; the spawn controller skips it.
    pub fn build(self) -> SpeciesResult<SwarmConfig> {
        let n = self.species.len();
        if n > u16::MAX as usize || self.templates.len() > u16::MAX as usize {
            return Err(SpeciesError::TooManySpecies(n.max(self.templates.len())));
        }

        for t in &self.templates {
            if !t.max_speed.is_finite() || t.max_speed < 0.0 {
                return Err(SpeciesError::InvalidMaxSpeed {
                    template: t.name.clone(),
                    value:    t.max_speed,
                });
            }
        }

        let mut flat = Vec::with_capacity(n * n);
        let mut spawn = Vec::with_capacity(n);

        for (source, setup) in self.species.into_iter().enumerate() {
            check_spawn(source, "spawn radius", setup.spawn_radius)?;
            check_spawn(source, "initial velocity", setup.initial_random_velocity)?;

            let mut row = setup.rules;
            row.resize(n, InteractionRule::NONE);
            for (target, rule) in row.iter().enumerate() {
                check_rule(source, target, rule)?;
            }
            flat.extend(row);

            spawn.push(SpeciesSpawnConfig {
                template:                setup.template,
                count:                   setup.count,
                initial_random_velocity: setup.initial_random_velocity,
                spawn_radius:            setup.spawn_radius,
                spawn_center:            setup.spawn_center,
            });
        }

        Ok(SwarmConfig {
            templates: self.templates,
            spawn,
            matrix:    InteractionMatrix::new(n, flat)?,
            settings:  GlobalSettings { total_species_count: n },
        })
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn check_spawn(species: usize, what: &'static str, value: f32) -> SpeciesResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SpeciesError::InvalidSpawnParameter { species, what, value })
    }
}

fn check_rule(source: usize, target: usize, rule: &InteractionRule) -> SpeciesResult<()> {
    let invalid = |what: &'static str, value: f32| SpeciesError::InvalidRule {
        source_species: source,
        target_species: target,
        what,
        value,
    };

    for (what, value) in [
        ("separation radius", rule.separation_radius),
        ("flocking radius",   rule.flocking_radius),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(what, value));
        }
    }
    // Non-positive weights are legal: they simply switch the behaviour off.
    for (what, value) in [
        ("separation weight", rule.separation_weight),
        ("alignment weight",  rule.alignment_weight),
        ("cohesion weight",   rule.cohesion_weight),
    ] {
        if !value.is_finite() {
            return Err(invalid(what, value));
        }
    }
    Ok(())
}
