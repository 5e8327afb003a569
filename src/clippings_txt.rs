// Kindle の "My Clippings.txt" の解析
//
// 1 件ごとに "==========" の行で区切られ、次の形をしている：
//
//     <タイトル>[ (<著者>)]
//     - Your <種別> [on page <ページ>[-<無視>]] [| location <開始>[-<終了>]] | Added on <日時>
//
//     <本文>
//
// 端末のファームウェアによって書式が少しずつ異なるので、複数のパターンを順に試す
// - 改行は CR+LF のこともある
// - 本によって Unicode の正規化が揃っていない

pub mod parser;
pub mod pattern;
pub mod splitter;
