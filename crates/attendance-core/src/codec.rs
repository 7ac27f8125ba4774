//! Codec - stdin テキストと Response JSON の相互変換
//!
//! # デコードフロー
//! 1. 空文字列なら `InputError::Empty`
//! 2. JSON object としてパース（配列や数値などトップレベルが object 以外は拒否）
//! 3. InputRecord に変換（currentAttendance が null や数値以外ならここで失敗）
//!
//! # エンコード
//! 区切りは `", "` と `": "`、非 ASCII は `\uXXXX` にエスケープする。
//! 呼び出し側が今まで受け取っていたバイト列と同じ形にするため。

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::domain::{InputRecord, Response};
use crate::error::InputError;

pub fn decode_input(raw: &str) -> Result<InputRecord, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    // Map first: a derived struct would also accept a JSON array.
    let object: Map<String, Value> = serde_json::from_str(raw)?;
    let record = InputRecord::deserialize(Value::Object(object))?;
    Ok(record)
}

/// Write `response` as a single JSON line, without the trailing newline.
pub fn encode_response<W: Write>(
    writer: W,
    response: &Response,
) -> Result<(), serde_json::Error> {
    let mut ser = serde_json::Serializer::with_formatter(writer, SpacedAsciiFormatter);
    response.serialize(&mut ser)
}

/// One-line JSON with `", "` / `": "` separators and ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl SpacedAsciiFormatter {
    fn separator<W: ?Sized + Write>(writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        Self::separator(writer, first)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        Self::separator(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            // DEL is escaped too
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
