//! 控制台命令解析
//!
//! 把一行用户输入解析为编排层动作；解析失败返回用法提示

use std::path::PathBuf;

/// 用户命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 手动输入两个集合并提交
    Manual { sender: String, receiver: String },
    /// 选择发送方文件
    SelectSender(PathBuf),
    /// 选择接收方文件
    SelectReceiver(PathBuf),
    /// 切换"使用默认文件"开关
    UseDefault(bool),
    /// 提交当前选择的文件
    SubmitFiles,
    /// 请求生成测试数据
    TestData,
    /// 切换诊断面板
    ToggleLog,
    /// 显示帮助
    Help,
    /// 退出
    Quit,
}

/// 解析一行输入
///
/// # 返回
/// 解析失败时返回用法提示文案
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "manual" => {
            let (sender, receiver) = rest
                .split_once(';')
                .ok_or("usage: manual <sender set> ; <receiver set>")?;
            Ok(Command::Manual {
                sender: sender.trim().to_string(),
                receiver: receiver.trim().to_string(),
            })
        }
        "sender" => {
            if rest.is_empty() {
                return Err("usage: sender <path>".to_string());
            }
            Ok(Command::SelectSender(PathBuf::from(rest)))
        }
        "receiver" => {
            if rest.is_empty() {
                return Err("usage: receiver <path>".to_string());
            }
            Ok(Command::SelectReceiver(PathBuf::from(rest)))
        }
        "default" => match rest {
            "on" => Ok(Command::UseDefault(true)),
            "off" => Ok(Command::UseDefault(false)),
            _ => Err("usage: default on|off".to_string()),
        },
        "submit" => Ok(Command::SubmitFiles),
        "testdata" => Ok(Command::TestData),
        "log" => Ok(Command::ToggleLog),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command: {} (try 'help')", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manual_splits_on_semicolon() {
        let command = parse("manual 1,2,3 ; 2,3,4").unwrap();
        assert_eq!(
            command,
            Command::Manual {
                sender: "1,2,3".to_string(),
                receiver: "2,3,4".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_manual_keeps_empty_side_for_validator() {
        // 空集合不在这里拦截，交给输入校验服务报规范文案
        let command = parse("manual ; 2,3").unwrap();
        assert_eq!(
            command,
            Command::Manual {
                sender: String::new(),
                receiver: "2,3".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_manual_without_semicolon_is_usage_error() {
        assert!(parse("manual 1,2,3").is_err());
    }

    #[test]
    fn test_parse_file_selection() {
        assert_eq!(
            parse("sender data/a.txt").unwrap(),
            Command::SelectSender(PathBuf::from("data/a.txt"))
        );
        assert_eq!(
            parse("receiver b.csv").unwrap(),
            Command::SelectReceiver(PathBuf::from("b.csv"))
        );
        assert!(parse("sender").is_err());
    }

    #[test]
    fn test_parse_default_toggle() {
        assert_eq!(parse("default on").unwrap(), Command::UseDefault(true));
        assert_eq!(parse("default off").unwrap(), Command::UseDefault(false));
        assert!(parse("default maybe").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("submit").unwrap(), Command::SubmitFiles);
        assert_eq!(parse("testdata").unwrap(), Command::TestData);
        assert_eq!(parse("log").unwrap(), Command::ToggleLog);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse("frobnicate").unwrap_err();
        assert!(err.contains("unknown command"));
    }
}
