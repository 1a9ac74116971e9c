//! The fixed default catalog the store is seeded with.

use storyloom_core::{InteractiveElement, StoryPage, Storybook};

fn element(id: &str, emoji: &str, x: f64, y: f64, reward: &str) -> InteractiveElement {
    InteractiveElement {
        id: id.to_string(),
        emoji: emoji.to_string(),
        x,
        y,
        reward: reward.to_string(),
    }
}

fn page(id: &str, background: &str, text: &str, elements: Vec<InteractiveElement>) -> StoryPage {
    StoryPage {
        id: id.to_string(),
        background: background.to_string(),
        text: text.to_string(),
        interactive_elements: elements,
    }
}

/// The seeded catalog: five hand-authored books with composite glyph
/// backgrounds instead of generated image URLs.
pub fn default_storybooks() -> Vec<Storybook> {
    vec![
        Storybook {
            id: "1".to_string(),
            title: "小兔子的森林冒险".to_string(),
            cover: "🐰".to_string(),
            category: "冒险".to_string(),
            description: "跟着勇敢的小兔子探索神奇的森林，遇见各种有趣的朋友。".to_string(),
            pages: vec![
                page(
                    "1-1",
                    "🌲🌳🌲",
                    "在一个阳光明媚的早晨，小兔子决定去森林里探险...",
                    vec![
                        element("1-1-1", "🐰", 20.0, 60.0, "发现了小兔子！"),
                        element("1-1-2", "🦋", 70.0, 30.0, "美丽的蝴蝶在飞舞！"),
                        element("1-1-3", "🌺", 80.0, 70.0, "闻到了花香！"),
                    ],
                ),
                page(
                    "1-2",
                    "🏰🌙⭐",
                    "夜晚降临，小兔子看到了远处的城堡...",
                    vec![
                        element("1-2-1", "🏰", 50.0, 40.0, "神秘的城堡！"),
                        element("1-2-2", "🌟", 30.0, 20.0, "许愿星在闪烁！"),
                        element("1-2-3", "🦉", 20.0, 50.0, "智慧的猫头鹰出现了！"),
                    ],
                ),
            ],
        },
        Storybook {
            id: "2".to_string(),
            title: "海底世界奇遇记".to_string(),
            cover: "🐠".to_string(),
            category: "冒险".to_string(),
            description: "潜入神秘的海底世界，与海洋生物们成为朋友。".to_string(),
            pages: vec![page(
                "2-1",
                "🌊🐠🐙",
                "潜水镜一戴，我们来到了美丽的海底世界...",
                vec![
                    element("2-1-1", "🐠", 30.0, 40.0, "彩色小鱼游过来了！"),
                    element("2-1-2", "🐙", 60.0, 60.0, "章鱼在和你打招呼！"),
                    element("2-1-3", "🐚", 80.0, 80.0, "找到了美丽的贝壳！"),
                ],
            )],
        },
        Storybook {
            id: "3".to_string(),
            title: "公主和魔法花园".to_string(),
            cover: "👸".to_string(),
            category: "童话".to_string(),
            description: "美丽的公主在魔法花园里种植神奇的花朵。".to_string(),
            pages: vec![page(
                "3-1",
                "🌺🌸🌻",
                "公主来到了充满魔法的花园...",
                vec![
                    element("3-1-1", "👸", 40.0, 50.0, "公主微笑了！"),
                    element("3-1-2", "🌺", 60.0, 30.0, "魔法花朵绽放了！"),
                    element("3-1-3", "✨", 30.0, 25.0, "魔法星尘在闪烁！"),
                ],
            )],
        },
        Storybook {
            id: "4".to_string(),
            title: "太空探索之旅".to_string(),
            cover: "🚀".to_string(),
            category: "科学".to_string(),
            description: "乘坐火箭飞向太空，探索神秘的宇宙。".to_string(),
            pages: vec![page(
                "4-1",
                "🌌🪐⭐",
                "火箭发射了！我们来到了广阔的太空...",
                vec![
                    element("4-1-1", "🚀", 50.0, 70.0, "火箭正在飞行！"),
                    element("4-1-2", "🪐", 70.0, 40.0, "发现了美丽的星球！"),
                    element("4-1-3", "👨‍🚀", 30.0, 30.0, "宇航员向你挥手！"),
                ],
            )],
        },
        Storybook {
            id: "5".to_string(),
            title: "动物农场的一天".to_string(),
            cover: "🐄".to_string(),
            category: "动物".to_string(),
            description: "在农场里和可爱的动物们一起度过快乐的一天。".to_string(),
            pages: vec![page(
                "5-1",
                "🌾🏡🌻",
                "早晨的农场里，动物们都醒来了...",
                vec![
                    element("5-1-1", "🐄", 40.0, 60.0, "奶牛在哞哞叫！"),
                    element("5-1-2", "🐔", 60.0, 70.0, "小鸡在找虫子吃！"),
                    element("5-1-3", "🐷", 20.0, 50.0, "小猪在泥地里打滚！"),
                ],
            )],
        },
    ]
}
