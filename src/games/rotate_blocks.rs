// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::i18n::{Catalog, TranslationTable};

pub static TABLE: TranslationTable = TranslationTable::new("rotate-blocks", ZH_TW, EN, JA);

const ZH_TW: Catalog = &[
    ("game.title", "旋轉方塊"),
    ("game.level", "關卡"),
    ("game.moves", "步數"),
    ("game.best", "最佳紀錄"),
    ("game.hint", "點擊方塊旋轉，讓所有圖案對齊"),
    ("game.reset", "重置"),
    ("game.next", "下一關"),
    ("game.cleared", "過關！"),
    ("game.complete", "恭喜完成所有關卡！"),
];

const EN: Catalog = &[
    ("game.title", "Rotate Blocks"),
    ("game.level", "Level"),
    ("game.moves", "Moves"),
    ("game.best", "Best"),
    ("game.hint", "Tap a block to rotate it and line up every pattern"),
    ("game.reset", "Reset"),
    ("game.next", "Next Level"),
    ("game.cleared", "Level Cleared!"),
    ("game.complete", "Congratulations! You cleared every level!"),
];

const JA: Catalog = &[
    ("game.title", "回転ブロック"),
    ("game.level", "ステージ"),
    ("game.moves", "手数"),
    ("game.best", "ベスト"),
    ("game.hint", "ブロックをタップして回転させ、すべての模様をそろえよう"),
    ("game.reset", "リセット"),
    ("game.next", "次のステージ"),
    ("game.cleared", "ステージクリア！"),
    ("game.complete", "おめでとう！全ステージクリア！"),
];
