//! Katakana to Python mapping tables
//!
//! Declaration order is significant: completion candidates are emitted in
//! exactly this order.

use super::{Category, MappingEntry, MappingTable};

const fn m(source: &'static str, target: &'static str) -> MappingEntry {
    MappingEntry::new(source, target)
}

/// Python keywords
pub static KEYWORDS: MappingTable = MappingTable::new(Category::Keyword, KEYWORDS_ENTRIES);

const KEYWORDS_ENTRIES: &[MappingEntry] = &[
    // Logical and constants
    m("トゥルー", "True"),
    m("フォルス", "False"),
    m("ノン", "None"),
    // Control flow
    m("イフ", "if"),
    m("エリフ", "elif"),
    m("エルス", "else"),
    m("フォー", "for"),
    m("ホワイル", "while"),
    m("ブレーク", "break"),
    m("コンティニュー", "continue"),
    // Functions and classes
    m("デフ", "def"),
    m("クラス", "class"),
    m("リターン", "return"),
    m("イールド", "yield"),
    m("ラムダ", "lambda"),
    // Operators
    m("アンド", "and"),
    m("オア", "or"),
    m("ノット", "not"),
    m("イン", "in"),
    m("イズ", "is"),
    // Error handling
    m("トライ", "try"),
    m("エクセプト", "except"),
    m("ファイナリー", "finally"),
    m("レイズ", "raise"),
    // Modules and scope
    m("インポート", "import"),
    m("フロム", "from"),
    m("アズ", "as"),
    m("グローバル", "global"),
    m("ノンローカル", "nonlocal"),
    // Async
    m("エイシンク", "async"),
    m("アウェイト", "await"),
    // Miscellaneous
    m("パス", "pass"),
    m("デル", "del"),
    m("ウィズ", "with"),
    m("アサート", "assert"),
];

/// Python built-in functions, including the iteration helpers that are
/// technically types but are called like functions
pub static BUILTIN_FUNCTIONS: MappingTable =
    MappingTable::new(Category::BuiltinFunction, BUILTIN_FUNCTIONS_ENTRIES);

const BUILTIN_FUNCTIONS_ENTRIES: &[MappingEntry] = &[
    // I/O and interaction
    m("プリント", "print"),
    m("インプット", "input"),
    m("ヘルプ", "help"),
    // Data structures and collections
    m("レン", "len"),
    m("サム", "sum"),
    m("マックス", "max"),
    m("ミン", "min"),
    m("ソーテッド", "sorted"),
    m("リバースド", "reversed"),
    m("ディル", "dir"),
    // Functional and iteration tools
    m("オール", "all"),
    m("エニー", "any"),
    m("マップ", "map"),
    m("フィルター", "filter"),
    m("ジップ", "zip"),
    m("スライス", "slice"),
    m("イター", "iter"),
    m("ネクスト", "next"),
    m("エイター", "aiter"),
    m("エイネクスト", "anext"),
    m("レンジ", "range"),
    // Math and numbers
    m("エービーエス", "abs"),
    m("パウ", "pow"),
    m("ラウンド", "round"),
    m("ディブモッド", "divmod"),
    // Objects and attributes
    m("イズインスタンス", "isinstance"),
    m("イズサブクラス", "issubclass"),
    m("ハズアトリブ", "hasattr"),
    m("ゲットアトリブ", "getattr"),
    m("セットアトリブ", "setattr"),
    m("デルアトリブ", "delattr"),
    // Strings and representation
    m("アスキー", "ascii"),
    m("ビン", "bin"),
    m("レップ", "repr"),
    m("フォーマット", "format"),
    m("ヘックス", "hex"),
    m("オクト", "oct"),
    m("キャラ", "chr"),
    m("オーアールディー", "ord"),
    // Advanced
    m("コーラブル", "callable"),
    m("コンパイル", "compile"),
    m("エバル", "eval"),
    m("エグゼック", "exec"),
    m("グローバルズ", "globals"),
    m("ハッシュ", "hash"),
    m("アイディー", "id"),
    m("ローカルズ", "locals"),
    m("オープン", "open"),
    m("バーズ", "vars"),
    // REPL and environment
    m("ブレークポイント", "breakpoint"),
    m("コピーライト", "copyright"),
    m("クレジッツ", "credits"),
    m("エグジット", "exit"),
    m("ライセンス", "license"),
    m("クイット", "quit"),
];

/// Python built-in types
pub static BUILTIN_TYPES: MappingTable =
    MappingTable::new(Category::BuiltinType, BUILTIN_TYPES_ENTRIES);

const BUILTIN_TYPES_ENTRIES: &[MappingEntry] = &[
    // Basic
    m("ブール", "bool"),
    m("イント", "int"),
    m("フロート", "float"),
    m("ストリング", "str"),
    // Collections
    m("リスト", "list"),
    m("タプル", "tuple"),
    m("ディクト", "dict"),
    m("セット", "set"),
    m("フローズンセット", "frozenset"),
    // Advanced
    m("バイツ", "bytes"),
    m("バイトアレイ", "bytearray"),
    m("コンプレックス", "complex"),
    m("エニュメレート", "enumerate"),
    m("メモリビュー", "memoryview"),
    m("オブジェクト", "object"),
    m("タイプ", "type"),
    m("スーパー", "super"),
    m("プロパティ", "property"),
    m("クラスメソッド", "classmethod"),
    m("スタティックメソッド", "staticmethod"),
];
