use serde_json::Value;

use super::{
    form_name,
    gender::{gender_variants, VariantKind},
    model::{GameRow, GenerationBlock, SpriteVariant},
    tree,
    varieties::{variety_variants, ResolvedVariety},
};

/// How a game slot turns its sprite map into variant lists.
#[derive(Debug, Clone, Copy)]
enum SlotStyle {
    /// Gender-paired front/shiny lists, plus gender-paired back lists when
    /// the generation has back sprites.
    Gendered,
    /// One unlabeled variant per field, emitted even when the url is null.
    Bare,
    /// Like `Bare` for the front fields, but back fields are omitted when
    /// absent and fall back to another slot's back fields first.
    BareBackFallback { fallback: &'static [&'static str] },
    /// One unlabeled front variant; the shiny list is empty when absent.
    Icon,
    /// Generation 1: grayscale primary with a "Colorized" variant appended,
    /// gated on either front field being present. No shiny data exists.
    Grayscale,
}

/// One candidate game within a generation.
struct SlotSpec {
    /// Fixed display name; `None` title-cases the last path segment.
    label: Option<&'static str>,
    /// Lookup path from the sprite tree root; empty means the root itself.
    path: &'static [&'static str],
    style: SlotStyle,
    /// Dotted path + form-name filter for appended alternate-form variants.
    variety: Option<(&'static str, &'static str)>,
    /// Another slot whose front-default must be present for this slot to be
    /// considered at all.
    requires_front: Option<&'static [&'static str]>,
}

struct GenSpec {
    title: &'static str,
    has_back: bool,
    has_shiny: bool,
    slots: &'static [SlotSpec],
}

/// The per-generation game tables, newest generation first. Every quirk here
/// mirrors the upstream data: which games carry gender pairs, where the
/// alternate forms slot in, and which fields cover for missing siblings.
static GENERATIONS: &[GenSpec] = &[
    GenSpec {
        title: "Generation 9",
        has_back: false,
        has_shiny: true,
        slots: &[SlotSpec {
            label: Some("Scarlet Violet"),
            path: &["versions", "generation-ix", "scarlet-violet"],
            style: SlotStyle::Gendered,
            variety: None,
            requires_front: None,
        }],
    },
    GenSpec {
        title: "Generation 8",
        has_back: false,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: Some("Home"),
                path: &["other", "home"],
                style: SlotStyle::Gendered,
                variety: Some(("other.home", "")),
                requires_front: None,
            },
            SlotSpec {
                label: Some("Brilliant Diamond Shining Pearl"),
                path: &["versions", "generation-viii", "brilliant-diamond-shining-pearl"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: Some("Sword Shield"),
                path: &[],
                style: SlotStyle::Gendered,
                variety: Some(("", "Gigantamax")),
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 7",
        has_back: false,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: Some("Ultra Sun Ultra Moon"),
                path: &["versions", "generation-vii", "ultra-sun-ultra-moon"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
            // the Let's Go set has no gender split in this dataset
            SlotSpec {
                label: Some("Let's Go Pikachu Let's Go Eevee"),
                path: &["versions", "generation-vii", "icons"],
                style: SlotStyle::Icon,
                variety: None,
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 6",
        has_back: false,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: Some("Bank"),
                path: &["other", "home"],
                style: SlotStyle::Gendered,
                variety: Some(("other.home", "Mega")),
                requires_front: None,
            },
            SlotSpec {
                label: Some("GO"),
                path: &["other", "showdown"],
                style: SlotStyle::Gendered,
                variety: Some(("other.showdown", "Mega")),
                requires_front: None,
            },
            SlotSpec {
                label: Some("Omega Ruby Alpha Sapphire"),
                path: &["versions", "generation-vi", "omegaruby-alphasapphire"],
                style: SlotStyle::Gendered,
                variety: Some(("versions.generation-vi.omegaruby-alphasapphire", "Mega")),
                requires_front: None,
            },
            SlotSpec {
                label: Some("X Y"),
                path: &["versions", "generation-vi", "x-y"],
                style: SlotStyle::Gendered,
                variety: Some(("versions.generation-vi.x-y", "Mega")),
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 5",
        has_back: true,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: Some("Black White"),
                path: &["versions", "generation-v", "black-white"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: Some("Black 2 White 2 Black White Animated"),
                path: &["versions", "generation-v", "black-white", "animated"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: Some(&["versions", "generation-v", "black-white"]),
            },
        ],
    },
    GenSpec {
        title: "Generation 4",
        has_back: true,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: None,
                path: &["versions", "generation-iv", "heartgold-soulsilver"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-iv", "platinum"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-iv", "diamond-pearl"],
                style: SlotStyle::Gendered,
                variety: None,
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 3",
        has_back: true,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: None,
                path: &["versions", "generation-iii", "emerald"],
                style: SlotStyle::BareBackFallback {
                    fallback: &["versions", "generation-iii", "ruby-sapphire"],
                },
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-iii", "firered-leafgreen"],
                style: SlotStyle::BareBackFallback {
                    fallback: &["versions", "generation-iii", "ruby-sapphire"],
                },
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-iii", "ruby-sapphire"],
                style: SlotStyle::BareBackFallback {
                    fallback: &["versions", "generation-iii", "ruby-sapphire"],
                },
                variety: None,
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 2",
        has_back: true,
        has_shiny: true,
        slots: &[
            SlotSpec {
                label: None,
                path: &["versions", "generation-ii", "crystal"],
                style: SlotStyle::Bare,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-ii", "gold"],
                style: SlotStyle::Bare,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-ii", "silver"],
                style: SlotStyle::Bare,
                variety: None,
                requires_front: None,
            },
        ],
    },
    GenSpec {
        title: "Generation 1",
        has_back: true,
        has_shiny: false,
        slots: &[
            SlotSpec {
                label: None,
                path: &["versions", "generation-i", "yellow"],
                style: SlotStyle::Grayscale,
                variety: None,
                requires_front: None,
            },
            SlotSpec {
                label: None,
                path: &["versions", "generation-i", "red-blue"],
                style: SlotStyle::Grayscale,
                variety: None,
                requires_front: None,
            },
        ],
    },
];

fn unlabeled(url: Option<String>) -> SpriteVariant {
    SpriteVariant {
        label: String::new(),
        url,
    }
}

fn slot_label(slot: &SlotSpec) -> String {
    match slot.label {
        Some(label) => label.to_string(),
        None => form_name::title_case_key(slot.path.last().copied().unwrap_or_default()),
    }
}

fn build_row(sprites: &Value, varieties: &[ResolvedVariety], gen: &GenSpec, slot: &SlotSpec) -> Option<GameRow> {
    if let Some(required) = slot.requires_front {
        tree::descend(sprites, required).and_then(|game| tree::url(game, "front_default"))?;
    }
    let game = tree::descend(sprites, slot.path)?;

    match slot.style {
        SlotStyle::Gendered => {
            // existence gate: no front-default sprite, no row
            tree::url(game, "front_default")?;

            let mut normal = gender_variants(Some(game), VariantKind::Front);
            let mut shiny = gender_variants(Some(game), VariantKind::FrontShiny);
            if let Some((path, filter)) = slot.variety {
                normal.extend(variety_variants(varieties, path, VariantKind::Front, filter));
                shiny.extend(variety_variants(varieties, path, VariantKind::FrontShiny, filter));
            }

            let (back, back_shiny) = if gen.has_back {
                (
                    Some(gender_variants(Some(game), VariantKind::Back)),
                    Some(gender_variants(Some(game), VariantKind::BackShiny)),
                )
            } else {
                (None, None)
            };

            Some(GameRow {
                game: slot_label(slot),
                normal_sprites: normal,
                shiny_sprites: shiny,
                back_sprites: back,
                back_shiny_sprites: back_shiny,
            })
        }
        SlotStyle::Bare => {
            tree::url(game, "front_default")?;

            Some(GameRow {
                game: slot_label(slot),
                normal_sprites: vec![unlabeled(tree::url(game, "front_default"))],
                shiny_sprites: vec![unlabeled(tree::url(game, "front_shiny"))],
                back_sprites: Some(vec![unlabeled(tree::url(game, "back_default"))]),
                back_shiny_sprites: Some(vec![unlabeled(tree::url(game, "back_shiny"))]),
            })
        }
        SlotStyle::BareBackFallback { fallback } => {
            tree::url(game, "front_default")?;
            let fallback = tree::descend(sprites, fallback);

            let back = tree::url(game, "back_default")
                .or_else(|| fallback.and_then(|f| tree::url(f, "back_default")));
            let back_shiny = tree::url(game, "back_shiny")
                .or_else(|| fallback.and_then(|f| tree::url(f, "back_shiny")));

            Some(GameRow {
                game: slot_label(slot),
                normal_sprites: vec![unlabeled(tree::url(game, "front_default"))],
                shiny_sprites: vec![unlabeled(tree::url(game, "front_shiny"))],
                back_sprites: Some(back.map(|url| vec![unlabeled(Some(url))]).unwrap_or_default()),
                back_shiny_sprites: Some(
                    back_shiny.map(|url| vec![unlabeled(Some(url))]).unwrap_or_default(),
                ),
            })
        }
        SlotStyle::Icon => {
            let front = tree::url(game, "front_default")?;

            Some(GameRow {
                game: slot_label(slot),
                normal_sprites: vec![unlabeled(Some(front))],
                shiny_sprites: tree::url(game, "front_shiny")
                    .map(|url| vec![unlabeled(Some(url))])
                    .unwrap_or_default(),
                back_sprites: None,
                back_shiny_sprites: None,
            })
        }
        SlotStyle::Grayscale => {
            let gray = tree::url(game, "front_gray");
            let color = tree::url(game, "front_default");
            if gray.is_none() && color.is_none() {
                return None;
            }

            let mut normal = Vec::new();
            if let Some(url) = gray {
                normal.push(unlabeled(Some(url)));
            }
            if let Some(url) = color {
                normal.push(SpriteVariant {
                    label: "Colorized".to_string(),
                    url: Some(url),
                });
            }

            let mut back = Vec::new();
            if let Some(url) = tree::url(game, "back_gray") {
                back.push(unlabeled(Some(url)));
            }
            if let Some(url) = tree::url(game, "back_default") {
                back.push(SpriteVariant {
                    label: "Colorized".to_string(),
                    url: Some(url),
                });
            }

            Some(GameRow {
                game: slot_label(slot),
                normal_sprites: normal,
                shiny_sprites: Vec::new(),
                back_sprites: Some(back),
                back_shiny_sprites: Some(Vec::new()),
            })
        }
    }
}

/// Assembles the ordered generation blocks, newest first. A generation is
/// emitted only when at least one of its candidate slots produced a row.
pub fn build_generations(sprites: &Value, varieties: &[ResolvedVariety]) -> Vec<GenerationBlock> {
    GENERATIONS
        .iter()
        .filter_map(|gen| {
            let games = gen
                .slots
                .iter()
                .filter_map(|slot| build_row(sprites, varieties, gen, slot))
                .collect::<Vec<_>>();
            if games.is_empty() {
                return None;
            }
            Some(GenerationBlock {
                title: gen.title.to_string(),
                has_back: gen.has_back,
                has_shiny: gen.has_shiny,
                games,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variety(form_name: &str, sprites: Value) -> ResolvedVariety {
        ResolvedVariety {
            name: form_name.to_lowercase().replace(' ', "-"),
            form_name: form_name.to_string(),
            sprites,
        }
    }

    fn blocks(sprites: Value) -> Vec<GenerationBlock> {
        build_generations(&sprites, &[])
    }

    fn find<'a>(blocks: &'a [GenerationBlock], title: &str) -> &'a GenerationBlock {
        blocks.iter().find(|b| b.title == title).unwrap()
    }

    #[test]
    fn derived_slot_labels_are_total() {
        let rootish = SlotSpec {
            label: None,
            path: &[],
            style: SlotStyle::Bare,
            variety: None,
            requires_front: None,
        };
        assert_eq!(slot_label(&rootish), "");

        let keyed = SlotSpec {
            label: None,
            path: &["versions", "generation-iv", "heartgold-soulsilver"],
            style: SlotStyle::Gendered,
            variety: None,
            requires_front: None,
        };
        assert_eq!(slot_label(&keyed), "Heartgold Soulsilver");
    }

    #[test]
    fn generations_come_newest_first() {
        let sprites = json!({
            "front_default": "root.png",
            "versions": {
                "generation-i": {"red-blue": {"front_gray": "g.png"}},
                "generation-v": {"black-white": {"front_default": "bw.png"}},
            }
        });

        let titles = blocks(sprites).iter().map(|b| b.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Generation 8", "Generation 5", "Generation 1"]);
    }

    #[test]
    fn row_gate_is_front_default_regardless_of_other_fields() {
        let sprites = json!({
            "versions": {
                "generation-ix": {
                    "scarlet-violet": {"front_default": null, "front_shiny": "shiny.png"}
                }
            }
        });
        assert!(blocks(sprites).is_empty());

        let sprites = json!({
            "versions": {
                "generation-ix": {"scarlet-violet": {"front_default": "sv.png"}}
            }
        });
        let blocks = blocks(sprites);
        let gen9 = find(&blocks, "Generation 9");
        assert!(!gen9.has_back);
        assert!(gen9.has_shiny);
        assert_eq!(gen9.games[0].game, "Scarlet Violet");
        assert_eq!(gen9.games[0].shiny_sprites, Vec::new());
        assert_eq!(gen9.games[0].back_sprites, None);
    }

    #[test]
    fn gen1_builds_grayscale_and_colorized_variants() {
        let sprites = json!({
            "versions": {
                "generation-i": {
                    "red-blue": {
                        "front_gray": "g.png",
                        "front_default": "c.png",
                        "back_gray": "bg.png",
                    }
                }
            }
        });

        let blocks = blocks(sprites);
        let gen1 = find(&blocks, "Generation 1");
        assert!(gen1.has_back);
        assert!(!gen1.has_shiny);

        let row = &gen1.games[0];
        assert_eq!(row.game, "Red Blue");
        assert_eq!(
            row.normal_sprites,
            vec![
                SpriteVariant { label: String::new(), url: Some("g.png".to_string()) },
                SpriteVariant { label: "Colorized".to_string(), url: Some("c.png".to_string()) },
            ]
        );
        assert_eq!(
            row.back_sprites,
            Some(vec![SpriteVariant { label: String::new(), url: Some("bg.png".to_string()) }])
        );
        assert_eq!(row.shiny_sprites, Vec::new());
        assert_eq!(row.back_shiny_sprites, Some(Vec::new()));
    }

    #[test]
    fn gen1_row_appears_with_only_a_colorized_front() {
        let sprites = json!({
            "versions": {"generation-i": {"yellow": {"front_default": "y.png"}}}
        });

        let blocks = blocks(sprites);
        let row = &find(&blocks, "Generation 1").games[0];
        assert_eq!(row.game, "Yellow");
        assert_eq!(row.normal_sprites.len(), 1);
        assert_eq!(row.normal_sprites[0].label, "Colorized");
    }

    #[test]
    fn gen3_back_fields_fall_back_to_ruby_sapphire() {
        let sprites = json!({
            "versions": {
                "generation-iii": {
                    "emerald": {"front_default": "e.png"},
                    "ruby-sapphire": {"back_default": "rsback.png"},
                }
            }
        });

        let blocks = blocks(sprites);
        let gen3 = find(&blocks, "Generation 3");
        // ruby-sapphire itself has no front sprite, so only emerald shows
        assert_eq!(gen3.games.len(), 1);

        let row = &gen3.games[0];
        assert_eq!(row.game, "Emerald");
        assert_eq!(
            row.back_sprites,
            Some(vec![SpriteVariant { label: String::new(), url: Some("rsback.png".to_string()) }])
        );
        assert_eq!(row.back_shiny_sprites, Some(Vec::new()));
    }

    #[test]
    fn gen3_own_back_field_wins_over_the_fallback() {
        let sprites = json!({
            "versions": {
                "generation-iii": {
                    "emerald": {"front_default": "e.png", "back_default": "eback.png"},
                    "ruby-sapphire": {"back_default": "rsback.png"},
                }
            }
        });

        let blocks = blocks(sprites);
        let row = &find(&blocks, "Generation 3").games[0];
        assert_eq!(row.back_sprites.as_ref().unwrap()[0].url.as_deref(), Some("eback.png"));
    }

    #[test]
    fn gen2_emits_all_fields_even_when_null() {
        let sprites = json!({
            "versions": {
                "generation-ii": {"crystal": {"front_default": "cr.png", "front_shiny": null}}
            }
        });

        let blocks = blocks(sprites);
        let row = &find(&blocks, "Generation 2").games[0];
        assert_eq!(row.game, "Crystal");
        assert_eq!(row.shiny_sprites, vec![SpriteVariant { label: String::new(), url: None }]);
        assert_eq!(
            row.back_sprites,
            Some(vec![SpriteVariant { label: String::new(), url: None }])
        );
    }

    #[test]
    fn gen5_animated_row_requires_the_black_white_front() {
        let with_animated = json!({
            "versions": {
                "generation-v": {
                    "black-white": {
                        "front_default": "bw.png",
                        "animated": {"front_default": "bw.gif"},
                    }
                }
            }
        });
        let blocks = build_generations(&with_animated, &[]);
        let gen5 = find(&blocks, "Generation 5");
        assert_eq!(gen5.games.len(), 2);
        assert_eq!(gen5.games[1].game, "Black 2 White 2 Black White Animated");
        assert_eq!(gen5.games[1].normal_sprites[0].url.as_deref(), Some("bw.gif"));

        let without_animated = json!({
            "versions": {"generation-v": {"black-white": {"front_default": "bw.png"}}}
        });
        let blocks = build_generations(&without_animated, &[]);
        assert_eq!(find(&blocks, "Generation 5").games.len(), 1);

        // the animated sub-object alone does not resurrect the generation
        let animated_only = json!({
            "versions": {
                "generation-v": {"black-white": {"animated": {"front_default": "bw.gif"}}}
            }
        });
        assert!(build_generations(&animated_only, &[])
            .iter()
            .all(|b| b.title != "Generation 5"));
    }

    #[test]
    fn gen8_sword_shield_appends_only_gigantamax_forms() {
        let sprites = json!({"front_default": "swsh.png"});
        let varieties = vec![
            variety("Gigantamax", json!({"front_default": "gmax.png"})),
            variety("Alola", json!({"front_default": "alola.png"})),
        ];

        let blocks = build_generations(&sprites, &varieties);
        let row = &find(&blocks, "Generation 8").games[0];
        assert_eq!(row.game, "Sword Shield");
        assert_eq!(row.normal_sprites.len(), 2);
        assert_eq!(row.normal_sprites[1].label, "Gigantamax");
        assert_eq!(row.normal_sprites[1].url.as_deref(), Some("gmax.png"));
    }

    #[test]
    fn gen8_home_appends_all_forms_unfiltered() {
        let sprites = json!({"other": {"home": {"front_default": "home.png"}}});
        let varieties = vec![
            variety("Alola", json!({"other": {"home": {"front_default": "alola-home.png"}}})),
            variety("Gigantamax", json!({})),
        ];

        let blocks = build_generations(&sprites, &varieties);
        let gen8 = find(&blocks, "Generation 8");
        let home = gen8.games.iter().find(|g| g.game == "Home").unwrap();
        // the Gigantamax form has no Home sprites, so only Alola is appended
        assert_eq!(home.normal_sprites.len(), 2);
        assert_eq!(home.normal_sprites[1].label, "Alola");
    }

    #[test]
    fn gen6_slots_filter_forms_to_mega() {
        let sprites = json!({
            "versions": {"generation-vi": {"x-y": {"front_default": "xy.png"}}}
        });
        let varieties = vec![
            variety(
                "Mega Base",
                json!({"versions": {"generation-vi": {"x-y": {"front_default": "mega-xy.png"}}}}),
            ),
            variety(
                "Alola",
                json!({"versions": {"generation-vi": {"x-y": {"front_default": "alola-xy.png"}}}}),
            ),
        ];

        let blocks = build_generations(&sprites, &varieties);
        let row = &find(&blocks, "Generation 6").games[0];
        assert_eq!(row.game, "X Y");
        assert_eq!(row.normal_sprites.len(), 2);
        assert_eq!(row.normal_sprites[1].label, "Mega Base");
    }

    #[test]
    fn gen7_icon_slot_has_no_gender_pairing() {
        let sprites = json!({
            "versions": {
                "generation-vii": {
                    "icons": {"front_default": "lgpe.png", "front_female": "ignored.png"}
                }
            }
        });

        let blocks = blocks(sprites);
        let row = &find(&blocks, "Generation 7").games[0];
        assert_eq!(row.game, "Let's Go Pikachu Let's Go Eevee");
        assert_eq!(
            row.normal_sprites,
            vec![SpriteVariant { label: String::new(), url: Some("lgpe.png".to_string()) }]
        );
        assert_eq!(row.shiny_sprites, Vec::new());
    }
}
