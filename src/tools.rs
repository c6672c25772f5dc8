use memchr::memchr2;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// 起始行标记常量：`<36 位会话标识>|<至少 6 位数字>:`
const SESSION_TOKEN_LENGTH: usize = 36;
const MIN_SEQUENCE_DIGITS: usize = 6;
const SEQUENCE_START_INDEX: usize = SESSION_TOKEN_LENGTH + 1;
const MIN_LINE_LENGTH: usize = SEQUENCE_START_INDEX + MIN_SEQUENCE_DIGITS + 1;

// 预定义的字节常量，避免重复创建
const PIPE_BYTE: u8 = b'|';
const LF_BYTE: u8 = b'\n';
const CR_BYTE: u8 = b'\r';

// 序号部分：至少 6 位十进制数字（Unicode Nd，不限于 ASCII）后跟 `:`
static SEQUENCE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6,}:").expect("sequence prefix pattern is valid"));

/// 期望输入恰好为 36 字节，且只包含小写十六进制数字和短横线。
#[inline(always)]
pub fn is_session_token_bytes(bytes: &[u8]) -> bool {
    bytes.len() == SESSION_TOKEN_LENGTH
        && bytes
            .iter()
            .all(|&b| matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'-'))
}

///
/// 判断一行日志是否为条目起始行。
///
/// 判断标准
/// 1. 行首 36 字节只包含 `[a-f0-9-]` -> 会话标识
/// 2. 会话标识后紧跟一个 `|`。
/// 3. 然后是至少 6 位十进制数字 -> 序号（包括全角、阿拉伯-印度等 Unicode 数字）。
/// 4. 序号后紧跟一个 `:`。
pub fn is_entry_start_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < MIN_LINE_LENGTH {
        return false;
    }

    if !is_session_token_bytes(&bytes[..SESSION_TOKEN_LENGTH]) {
        return false;
    }

    if bytes[SESSION_TOKEN_LENGTH] != PIPE_BYTE {
        return false;
    }

    // 前 37 字节均为 ASCII，此处一定是字符边界
    SEQUENCE_PREFIX.is_match(&line[SEQUENCE_START_INDEX..])
}

/// 宽松地将字节解码为 UTF-8 文本
///
/// 非法的字节序列会被直接丢弃（而不是替换为 U+FFFD）。
/// 输入完全合法时不产生任何拷贝。
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = simdutf8::basic::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    Cow::Owned(out)
}

/// 按行切分文本的迭代器
///
/// `\n`、`\r\n` 和单独的 `\r` 都视为行结束符，返回的行不包含结束符。
/// 文本末尾的结束符不会产生额外的空行。
#[derive(Debug, Clone)]
pub struct LogLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LogLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match memchr2(LF_BYTE, CR_BYTE, bytes) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let skip = if bytes[pos] == CR_BYTE && bytes.get(pos + 1) == Some(&LF_BYTE) {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[pos + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

/// 创建按行切分文本的迭代器
pub fn log_lines(text: &str) -> LogLines<'_> {
    LogLines { rest: text }
}
