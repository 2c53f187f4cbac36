//! Property tests for the power formulas and the phase pipeline.

mod common;

use battle_core::power::modifiers::{ammo_penalty, soft_cap};
use battle_core::power::{shelling_power, torpedo_power};
use battle_core::{
    BattleEnv, BattleOrchestrator, BattleTypeDescriptor, CombatantBuilder, CombinedFleetKind,
    DamageResolver, Engagement, EngagementForm, FleetRole, FleetSlot, Formation, HullCapability,
    PowerContext, Side, Strike, TimeOfDay,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

use common::*;

/// Resolver returning the same damage for every strike.
struct Fixed(u32);

impl DamageResolver for Fixed {
    fn resolve(&self, _strike: &Strike) -> u32 {
        self.0
    }
}

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    prop_oneof![
        Just(TimeOfDay::Day),
        Just(TimeOfDay::Night),
        Just(TimeOfDay::AirRaid),
        Just(TimeOfDay::AerialCombat),
    ]
}

fn engagement_form() -> impl Strategy<Value = EngagementForm> {
    prop::sample::select(EngagementForm::iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_no_base_torpedo_means_no_torpedo_power(
        levels in prop::collection::vec(0u8..=10, 0..=4),
        extra in 0i32..200,
        form in engagement_form(),
        role in prop_oneof![Just(FleetRole::None), Just(FleetRole::Main), Just(FleetRole::Escort)],
    ) {
        let master = snapshot();
        let env = BattleEnv::with_master(&master);
        let mut builder = CombatantBuilder::new(BATTLESHIP).role(role);
        for &level in &levels {
            builder = builder.slot(TORPEDO, level, None);
        }
        let mut ship = builder.build(&env).expect("battleship should build");
        ship.stats.torpedo += extra;

        prop_assert_eq!(ship.base_torpedo(), 0);
        for combined in [CombinedFleetKind::None, CombinedFleetKind::TransportEscort] {
            prop_assert_eq!(torpedo_power(&ship, &PowerContext::new(form, combined)), 0);
        }
    }

    #[test]
    fn prop_soft_cap_is_continuous_and_monotone(
        cap in prop_oneof![Just(100.0f64), Just(150.0), Just(180.0), Just(300.0)],
        a in 0.0f64..600.0,
        b in 0.0f64..600.0,
        eps in 0.0f64..1e-4,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(soft_cap(low, cap) <= soft_cap(high, cap));
        prop_assert!((soft_cap(cap + eps, cap) - cap).abs() <= 1e-2);
        prop_assert!((soft_cap(cap - eps, cap) - cap).abs() <= 1e-2);
    }

    #[test]
    fn prop_ammo_penalty_is_monotone(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ammo_penalty(low) <= ammo_penalty(high));
        prop_assert!((0.0..=1.0).contains(&ammo_penalty(high)));
    }

    #[test]
    fn prop_power_never_drops_with_more_ammo(a in 0u32..=20, b in 0u32..=20) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let master = snapshot();
        let env = BattleEnv::with_master(&master);
        let ctx = PowerContext::single(EngagementForm::Parallel);

        prop_assert!(
            shelling_power(&battleship(&env, low), &ctx)
                <= shelling_power(&battleship(&env, high), &ctx)
        );
        prop_assert!(
            torpedo_power(&destroyer(&env, low), &ctx)
                <= torpedo_power(&destroyer(&env, high), &ctx)
        );
    }

    #[test]
    fn prop_hp_only_goes_down(
        damage in 0u32..200,
        time in time_of_day(),
        ammo in 0u32..=20,
    ) {
        let master = snapshot();
        let resolver = Fixed(damage);
        let env = BattleEnv::with_master(&master)
            .with_capability(&HullCapability)
            .with_resolver(&resolver);
        let engagement = Engagement::default()
            .with_ships(
                Side::Friend,
                FleetSlot::Main,
                [battleship(&env, ammo), light_carrier(&env, ammo), destroyer(&env, ammo)],
            )
            .and_then(|e| {
                e.with_ships(
                    Side::Enemy,
                    FleetSlot::Main,
                    [destroyer(&env, ammo), submarine(&env, ammo), battleship(&env, ammo)],
                )
            })
            .expect("fleets should fit");

        let outcome = BattleOrchestrator::new(env)
            .resolve(&engagement, BattleTypeDescriptor::new(time, Formation::Single))
            .expect("battle should resolve");

        for (index, ship) in engagement.participants() {
            let end = outcome.hp(index).expect("participant should be tracked");
            prop_assert!(end <= ship.hp.current());
        }
        for event in outcome.events() {
            prop_assert!(event.damage <= damage);
        }
    }
}
