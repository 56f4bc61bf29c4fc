// SPDX-License-Identifier: PMPL-1.0-or-later

use crate::i18n::{Catalog, TranslationTable};

pub static TABLE: TranslationTable = TranslationTable::new("bomberman", ZH_TW, EN, JA);

const ZH_TW: Catalog = &[
    ("game.title", "炸彈人"),
    ("game.score", "分數"),
    ("game.lives", "生命"),
    ("game.level", "關卡"),
    ("game.start", "開始遊戲"),
    ("game.over", "遊戲結束"),
    ("game.win", "你贏了！"),
    ("game.restart", "重新開始"),
    ("game.controls", "方向鍵移動，空白鍵放置炸彈"),
    ("powerup.bomb", "炸彈 +1"),
    ("powerup.fire", "火力 +1"),
    ("powerup.speed", "速度 +1"),
];

const EN: Catalog = &[
    ("game.title", "Bomberman"),
    ("game.score", "Score"),
    ("game.lives", "Lives"),
    ("game.level", "Level"),
    ("game.start", "Start Game"),
    ("game.over", "Game Over"),
    ("game.win", "You Win!"),
    ("game.restart", "Restart"),
    ("game.controls", "Arrow keys to move, Space to drop a bomb"),
    ("powerup.bomb", "Bomb +1"),
    ("powerup.fire", "Fire +1"),
    ("powerup.speed", "Speed +1"),
];

const JA: Catalog = &[
    ("game.title", "ボンバーマン"),
    ("game.score", "スコア"),
    ("game.lives", "ライフ"),
    ("game.level", "レベル"),
    ("game.start", "ゲームスタート"),
    ("game.over", "ゲームオーバー"),
    ("game.win", "クリア！"),
    ("game.restart", "リスタート"),
    ("game.controls", "矢印キーで移動、スペースで爆弾を置く"),
    ("powerup.bomb", "ボム +1"),
    ("powerup.fire", "火力 +1"),
    ("powerup.speed", "スピード +1"),
];
