//! # 数值显示格式
//!
//! 千分位分组的定点数格式，例如 `98100.0` → `98,100.00`。
//!
//! ## 依赖关系
//! - 被 `units/` 下各单元使用

/// 定点格式并按千分位插入逗号
pub fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(98100.0, 2), "98,100.00");
        assert_eq!(grouped(3000.0, 2), "3,000.00");
        assert_eq!(grouped(999.994, 2), "999.99");
        assert_eq!(grouped(1234567.891, 1), "1,234,567.9");
        assert_eq!(grouped(0.0, 2), "0.00");
        assert_eq!(grouped(-1500.5, 2), "-1,500.50");
        assert_eq!(grouped(100000.0, 0), "100,000");
    }
}
