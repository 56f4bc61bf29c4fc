// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::i18n::{Catalog, TranslationTable};

pub static TABLE: TranslationTable = TranslationTable::new("snake", ZH_TW, EN, JA);

const ZH_TW: Catalog = &[
    ("game.title", "貪食蛇"),
    ("game.score", "分數"),
    ("game.high_score", "最高分"),
    ("game.length", "長度"),
    ("game.start", "開始遊戲"),
    ("game.pause", "暫停"),
    ("game.resume", "繼續"),
    ("game.over", "遊戲結束"),
    ("game.restart", "再玩一次"),
    ("game.controls", "使用方向鍵控制方向"),
];

const EN: Catalog = &[
    ("game.title", "Snake"),
    ("game.score", "Score"),
    ("game.high_score", "High Score"),
    ("game.length", "Length"),
    ("game.start", "Start Game"),
    ("game.pause", "Pause"),
    ("game.resume", "Resume"),
    ("game.over", "Game Over"),
    ("game.restart", "Play Again"),
    ("game.controls", "Use the arrow keys to steer"),
];

const JA: Catalog = &[
    ("game.title", "スネーク"),
    ("game.score", "スコア"),
    ("game.high_score", "ハイスコア"),
    ("game.length", "長さ"),
    ("game.start", "ゲームスタート"),
    ("game.pause", "一時停止"),
    ("game.resume", "再開"),
    ("game.over", "ゲームオーバー"),
    ("game.restart", "もう一度遊ぶ"),
    ("game.controls", "矢印キーで向きを変える"),
];
