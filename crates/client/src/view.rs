//! Plain-text screens for each game phase.
//!
//! Everything here is a pure function of the [`GameState`] and the content
//! tables, so the terminal can re-render any screen after any event.

use std::fmt::Write;

use spirit_content::ContentTables;
use spirit_core::{
    BattleState, ClassOracle, GameState, Phase, Skill, experience_for_next_level,
};

pub const HELP: &str = "\
Commands:
  a | b            answer the current question
  start            begin a battle (after the quiz or a victory)
  skill <n>        use skill number n
  item <id>        use an item, e.g. `item healing_potion`
  state            show the current screen again
  reset            start over from the first question
  quit             leave the game";

/// Screen for whatever phase the state is in.
///
/// Returns `None` while the enemy is about to act; the log lines streamed
/// for that turn are the only output until the player is up again.
pub fn screen(state: &GameState, tables: &ContentTables) -> Option<String> {
    match state.phase {
        Phase::Quiz => Some(question(state, tables)),
        Phase::Result => Some(result(state, tables)),
        Phase::Battle if state.is_player_turn() => state
            .battle
            .as_ref()
            .map(|battle| battle_status(state, battle, tables)),
        Phase::Battle => None,
        Phase::Victory => Some(victory(state)),
        Phase::GameOver => Some(game_over(state)),
    }
}

pub fn question(state: &GameState, tables: &ContentTables) -> String {
    let index = state.answers.len();
    let Some(question) = tables.questions.get(index) else {
        return "The quiz is complete.".to_string();
    };

    format!(
        "\nQuestion {}/{}: {}\n  a) {}\n  b) {}",
        index + 1,
        tables.questions.len(),
        question.text,
        question.options[0].label,
        question.options[1].label,
    )
}

pub fn result(state: &GameState, tables: &ContentTables) -> String {
    let Some(code) = state.personality else {
        return "Your personality has not been revealed yet.".to_string();
    };
    let Some(class) = tables.class(code) else {
        return format!("\nYour type is {code}.");
    };

    let mut out = String::new();
    let _ = writeln!(out, "\nYour type is {code}: {}", class.name);
    if !class.description.is_empty() {
        let _ = writeln!(out, "{}", class.description);
    }
    for description in code.traits() {
        let _ = writeln!(out, "  * {description}");
    }
    if let Some(passive) = &class.passive {
        let _ = writeln!(out, "Passive: {passive}");
    }
    let _ = writeln!(out, "HP {}  MP {}", class.base_hp, class.base_mp);
    let _ = writeln!(out, "Skills:");
    for (index, skill) in class.skills.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, skill_summary(skill));
    }
    out.push_str("Type `start` to begin your first battle.");
    out
}

fn skill_summary(skill: &Skill) -> String {
    let power = if skill.damage > 0 {
        format!("{} dmg", skill.damage)
    } else if skill.is_healing() {
        format!("heals {}", skill.heal_amount())
    } else {
        "buff".to_string()
    };

    let mut summary = format!("{} ({power}, {} MP", skill.name, skill.mp_cost);
    if skill.cooldown > 0 {
        let _ = write!(summary, ", cooldown {}", skill.cooldown);
    }
    summary.push(')');
    if !skill.description.is_empty() {
        let _ = write!(summary, " - {}", skill.description);
    }
    summary
}

pub fn battle_status(state: &GameState, battle: &BattleState, tables: &ContentTables) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{}  HP {}/{}  MP {}/{}   vs   {}  HP {}/{}",
        battle.class.name,
        battle.player_hp,
        battle.max_hp(),
        battle.player_mp,
        battle.max_mp(),
        battle.enemy.name(),
        battle.enemy.hp,
        battle.enemy.max_hp(),
    );

    let _ = writeln!(out, "Skills:");
    for (index, skill) in battle.class.skills.iter().enumerate() {
        let remaining = battle.cooldown(index);
        let availability = if remaining > 0 {
            format!(" [cooldown {remaining}]")
        } else if skill.mp_cost > battle.player_mp {
            " [not enough MP]".to_string()
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "  {}. {} ({} MP){availability}",
            index + 1,
            skill.name,
            skill.mp_cost
        );
    }

    let stocked: Vec<String> = state
        .inventory
        .stacks
        .iter()
        .filter(|stack| stack.quantity > 0)
        .map(|stack| {
            let name = tables
                .items
                .iter()
                .find(|item| item.id == stack.item)
                .map_or(stack.item.as_str(), |item| item.name.as_str());
            format!("{} x{} (`item {}`)", name, stack.quantity, stack.item)
        })
        .collect();
    if stocked.is_empty() {
        out.push_str("Items: none");
    } else {
        let _ = write!(out, "Items: {}", stocked.join(", "));
    }
    out
}

pub fn victory(state: &GameState) -> String {
    let level = state.level();
    format!(
        "\nVictory! Battles won: {}. Level {} (EXP {}/{}).\nType `start` for the next battle or `reset` to start over.",
        state.battle_count,
        level,
        state.experience,
        experience_for_next_level(level),
    )
}

pub fn game_over(state: &GameState) -> String {
    let enemy = state
        .battle
        .as_ref()
        .map_or("the enemy", |battle| battle.enemy.name());
    format!(
        "\nGame over. You were defeated by {enemy} after {} victories.\nType `reset` to retake the quiz.",
        state.battle_count
    )
}
