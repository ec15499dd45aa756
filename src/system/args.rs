//! # 命令行拆分
//!
//! 按 Windows 命令行约定将字符串拆分为参数:
//! - 空白分隔参数，双引号内的空白保留
//! - 反斜杠按字面保留，仅在双引号之前起转义作用
//!   (`2n` 个反斜杠 + `"` 得到 `n` 个反斜杠并切换引号，`2n+1` 个得到 `n` 个反斜杠和字面 `"`)
//! - 未闭合的引号延伸到末尾
//!
//! 路径如 `C:\src\app.csproj` 原样保留。
//!
//! ## 依赖关系
//! - 被 `batch/resolver.rs` 与 `system/process.rs` 使用

/// 拆分命令行，丢弃空白
pub fn split_command_line(text: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut in_argument = false;
    let mut quoted = false;
    let mut backslashes = 0usize;

    for c in text.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                in_argument = true;
            }
            '"' => {
                current.extend(std::iter::repeat('\\').take(backslashes / 2));
                if backslashes % 2 == 1 {
                    current.push('"');
                } else {
                    quoted = !quoted;
                }
                backslashes = 0;
                in_argument = true;
            }
            c if c.is_whitespace() && !quoted => {
                flush_backslashes(&mut current, &mut backslashes);
                if in_argument {
                    arguments.push(std::mem::take(&mut current));
                    in_argument = false;
                }
            }
            c => {
                flush_backslashes(&mut current, &mut backslashes);
                current.push(c);
                in_argument = true;
            }
        }
    }

    flush_backslashes(&mut current, &mut backslashes);
    if in_argument {
        arguments.push(current);
    }

    arguments
}

fn flush_backslashes(current: &mut String, backslashes: &mut usize) {
    current.extend(std::iter::repeat('\\').take(*backslashes));
    *backslashes = 0;
}
