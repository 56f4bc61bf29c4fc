// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::i18n::{Catalog, TranslationTable};

pub static TABLE: TranslationTable = TranslationTable::new("memory-match", ZH_TW, EN, JA);

const ZH_TW: Catalog = &[
    ("game.title", "記憶翻牌"),
    ("game.moves", "步數"),
    ("game.pairs", "配對"),
    ("game.time", "時間"),
    ("game.start", "開始"),
    ("game.hint", "翻開兩張牌，找出相同的圖案"),
    ("game.win", "全部配對成功！"),
    ("game.restart", "重新開始"),
];

const EN: Catalog = &[
    ("game.title", "Memory Match"),
    ("game.moves", "Moves"),
    ("game.pairs", "Pairs"),
    ("game.time", "Time"),
    ("game.start", "Start"),
    ("game.hint", "Flip two cards to find a matching pair"),
    ("game.win", "All pairs matched!"),
    ("game.restart", "Restart"),
];

const JA: Catalog = &[
    ("game.title", "神経衰弱"),
    ("game.moves", "手数"),
    ("game.pairs", "ペア"),
    ("game.time", "タイム"),
    ("game.start", "スタート"),
    ("game.hint", "カードを2枚めくって同じ絵柄を探そう"),
    ("game.win", "すべてのペアがそろった！"),
    ("game.restart", "リスタート"),
];
