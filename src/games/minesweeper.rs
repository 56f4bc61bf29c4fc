// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::i18n::{Catalog, TranslationTable};

pub static TABLE: TranslationTable = TranslationTable::new("minesweeper", ZH_TW, EN, JA);

const ZH_TW: Catalog = &[
    ("game.title", "踩地雷"),
    ("game.mines", "地雷"),
    ("game.time", "時間"),
    ("game.flag", "插旗"),
    ("game.new", "新遊戲"),
    ("game.win", "你找出了所有地雷！"),
    ("game.lose", "踩到地雷了！"),
    ("difficulty.easy", "初級"),
    ("difficulty.medium", "中級"),
    ("difficulty.hard", "高級"),
];

const EN: Catalog = &[
    ("game.title", "Minesweeper"),
    ("game.mines", "Mines"),
    ("game.time", "Time"),
    ("game.flag", "Flag"),
    ("game.new", "New Game"),
    ("game.win", "You found every mine!"),
    ("game.lose", "Boom! You hit a mine!"),
    ("difficulty.easy", "Beginner"),
    ("difficulty.medium", "Intermediate"),
    ("difficulty.hard", "Expert"),
];

const JA: Catalog = &[
    ("game.title", "マインスイーパー"),
    ("game.mines", "地雷"),
    ("game.time", "タイム"),
    ("game.flag", "旗"),
    ("game.new", "ニューゲーム"),
    ("game.win", "すべての地雷を見つけた！"),
    ("game.lose", "地雷を踏んでしまった！"),
    ("difficulty.easy", "初級"),
    ("difficulty.medium", "中級"),
    ("difficulty.hard", "上級"),
];
