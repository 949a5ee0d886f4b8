use core::fmt;

/// Something that happened during an encounter.
///
/// Entries render to the human-readable lines shown in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEntry {
    Appeared {
        enemy: String,
    },
    SkillHit {
        skill: String,
        damage: u32,
        critical: bool,
    },
    SkillHeal {
        skill: String,
        amount: u32,
    },
    SkillBuff {
        skill: String,
    },
    ItemHeal {
        item: String,
        amount: u32,
    },
    ItemMana {
        item: String,
        amount: u32,
    },
    ItemHit {
        item: String,
        damage: u32,
    },
    ItemBuff {
        item: String,
    },
    EnemyHit {
        enemy: String,
        attack: String,
        damage: u32,
        critical: bool,
    },
    Evaded {
        enemy: String,
        attack: String,
    },
    EnemyDefeated {
        enemy: String,
        experience: u32,
    },
    LevelUp {
        level: u32,
    },
    PlayerDefeated {
        enemy: String,
    },
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Appeared { enemy } => write!(f, "{enemy} appeared!"),
            LogEntry::SkillHit {
                skill,
                damage,
                critical,
            } => {
                write!(f, "Used {skill}! {damage} damage!")?;
                if *critical {
                    write!(f, " Critical hit!")?;
                }
                Ok(())
            }
            LogEntry::SkillHeal { skill, amount } => {
                write!(f, "Used {skill}! Recovered {amount} HP!")
            }
            LogEntry::SkillBuff { skill } => write!(f, "Used {skill}!"),
            LogEntry::ItemHeal { item, amount } => {
                write!(f, "Used {item}! Recovered {amount} HP!")
            }
            LogEntry::ItemMana { item, amount } => {
                write!(f, "Used {item}! Recovered {amount} MP!")
            }
            LogEntry::ItemHit { item, damage } => write!(f, "Threw {item}! {damage} damage!"),
            LogEntry::ItemBuff { item } => write!(f, "Used {item}!"),
            LogEntry::EnemyHit {
                enemy,
                attack,
                damage,
                critical,
            } => {
                write!(f, "{enemy} used {attack}! {damage} damage!")?;
                if *critical {
                    write!(f, " Critical hit!")?;
                }
                Ok(())
            }
            LogEntry::Evaded { enemy, attack } => {
                write!(f, "Dodged {enemy}'s {attack}!")
            }
            LogEntry::EnemyDefeated { enemy, experience } => {
                write!(f, "Defeated {enemy}! Gained {experience} EXP.")
            }
            LogEntry::LevelUp { level } => write!(f, "Reached level {level}!"),
            LogEntry::PlayerDefeated { enemy } => write!(f, "Fell to {enemy}..."),
        }
    }
}

/// Append-only, chronological encounter log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_order() {
        let mut log = BattleLog::default();
        log.push(LogEntry::Appeared {
            enemy: "Goblin".into(),
        });
        log.push(LogEntry::SkillHit {
            skill: "Flare Bolt".into(),
            damage: 30,
            critical: true,
        });
        log.push(LogEntry::EnemyHit {
            enemy: "Goblin".into(),
            attack: "Knife Slash".into(),
            damage: 12,
            critical: false,
        });

        assert_eq!(
            log.lines(),
            vec![
                "Goblin appeared!",
                "Used Flare Bolt! 30 damage! Critical hit!",
                "Goblin used Knife Slash! 12 damage!",
            ]
        );
    }
}
