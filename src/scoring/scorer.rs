use crate::pose::{Landmark, LandmarkIndex};

use super::angle::joint_angle;
use super::profile::{profile_for, AngleMetric, TargetProfile};

/// 採点に必要な最小ランドマーク数
///
/// これ未満の列は「未検出」として0点扱いにする。
pub const MIN_LANDMARKS: usize = LandmarkIndex::COUNT;

/// 1メトリクス分の採点結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScore {
    pub metric: AngleMetric,
    /// 計測した関節角度（度）
    pub measured: f32,
    /// 目標角度（度）
    pub target: f32,
    /// 100 - |計測 - 目標|、下限0
    pub score: f32,
}

/// ランドマーク列をポーズの目標角度と比較し、0〜100 の一致度を返す
///
/// 未検出（ランドマーク不足）・未知のポーズID・採点メトリクスなしは
/// すべて 0。フレームごとに任意の頻度で呼べるよう、どんな入力でも
/// エラーにはならない。
pub fn score(landmarks: &[Landmark], pose_id: &str) -> u8 {
    aggregate(&score_breakdown(landmarks, pose_id))
}

/// メトリクスごとの内訳つき採点
///
/// 0点ケース（未検出・未知ポーズ）では空の内訳を返す。
pub fn score_breakdown(landmarks: &[Landmark], pose_id: &str) -> Vec<MetricScore> {
    if landmarks.len() < MIN_LANDMARKS {
        return Vec::new();
    }

    let profile = match profile_for(pose_id) {
        Some(p) => p,
        None => return Vec::new(),
    };

    evaluate(landmarks, profile)
}

fn evaluate(landmarks: &[Landmark], profile: &TargetProfile) -> Vec<MetricScore> {
    let mut scores = Vec::new();

    for metric in AngleMetric::ALL {
        let target = match profile.target(metric) {
            Some(t) => t,
            None => continue,
        };

        let (proximal, vertex, distal) = metric.triple();
        let measured = joint_angle(
            &landmarks[proximal as usize],
            &landmarks[vertex as usize],
            &landmarks[distal as usize],
        );

        // 1度ズレるごとに1点減点、下限0
        let diff = (measured - target).abs();
        let score = (100.0 - diff).max(0.0);

        scores.push(MetricScore {
            metric,
            measured,
            target,
            score,
        });
    }

    scores
}

/// 内訳の算術平均を最近接整数へ丸めて返す（0.5は0から遠い方へ）
///
/// 内訳が空（採点メトリクスなし）のときは0。
pub fn aggregate(scores: &[MetricScore]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let sum: f32 = scores.iter().map(|s| s.score).sum();
    (sum / scores.len() as f32).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 全ランドマークを原点に置いた骨格
    fn make_skeleton() -> Vec<Landmark> {
        vec![Landmark::new(0.0, 0.0); LandmarkIndex::COUNT]
    }

    fn put(skeleton: &mut [Landmark], index: LandmarkIndex, x: f32, y: f32) {
        skeleton[index as usize] = Landmark::new(x, y);
    }

    /// 頂点から方向 deg（度）・半径 r の位置
    fn offset(vertex: (f32, f32), deg: f32, r: f32) -> (f32, f32) {
        let th = deg.to_radians();
        (vertex.0 + th.cos() * r, vertex.1 + th.sin() * r)
    }

    /// メトリクスの3点を配置する
    ///
    /// 頂点を vertex に置き、近位を prox_deg 方向、遠位を
    /// prox_deg + angle_deg 方向に置く。関節角度は angle_deg になる。
    fn put_joint(
        skeleton: &mut [Landmark],
        metric: AngleMetric,
        vertex: (f32, f32),
        prox_deg: f32,
        angle_deg: f32,
    ) {
        let (proximal, v, distal) = metric.triple();
        put(skeleton, v, vertex.0, vertex.1);
        let p = offset(vertex, prox_deg, 0.1);
        put(skeleton, proximal, p.0, p.1);
        let d = offset(vertex, prox_deg + angle_deg, 0.1);
        put(skeleton, distal, d.0, d.1);
    }

    /// treeの目標角度ぴったりの骨格
    ///
    /// leftElbow=40, rightElbow=40, leftKnee=90, rightKnee=180
    fn tree_skeleton() -> Vec<Landmark> {
        let mut sk = make_skeleton();
        put_joint(&mut sk, AngleMetric::LeftElbow, (0.35, 0.35), -90.0, 40.0);
        put_joint(&mut sk, AngleMetric::RightElbow, (0.65, 0.35), -90.0, -40.0);
        put_joint(&mut sk, AngleMetric::LeftKnee, (0.40, 0.75), -90.0, 90.0);
        put_joint(&mut sk, AngleMetric::RightKnee, (0.60, 0.75), -90.0, 180.0);
        sk
    }

    #[test]
    fn test_no_detection_returns_zero() {
        assert_eq!(score(&[], "tree"), 0);

        // 32個では1つ足りない
        let short = vec![Landmark::new(0.5, 0.5); 32];
        assert_eq!(score(&short, "tree"), 0);

        // 33個ちょうどなら採点される
        let sk = tree_skeleton();
        assert_eq!(sk.len(), 33);
        assert_eq!(score(&sk, "tree"), 100);
    }

    #[test]
    fn test_unknown_pose_returns_zero() {
        let sk = tree_skeleton();
        assert_eq!(score(&sk, "not-a-real-pose"), 0);
        assert_eq!(score(&sk, ""), 0);
    }

    #[test]
    fn test_empty_profile_aggregates_to_zero() {
        // メトリクスなしのプロファイルは平均の分母が0になるため明示的に0
        assert_eq!(aggregate(&[]), 0);
    }

    #[test]
    fn test_tree_exact_match() {
        let sk = tree_skeleton();
        assert_eq!(score(&sk, "tree"), 100);

        let breakdown = score_breakdown(&sk, "tree");
        assert_eq!(breakdown.len(), 4);
        for m in &breakdown {
            assert!(m.score > 99.9, "{:?} = {}", m.metric, m.score);
        }
    }

    #[test]
    fn test_cat_exact_match() {
        let mut sk = make_skeleton();
        // 四つん這い: 肘はまっすぐ、膝は直角
        put_joint(&mut sk, AngleMetric::LeftElbow, (0.30, 0.50), 90.0, 180.0);
        put_joint(&mut sk, AngleMetric::RightElbow, (0.35, 0.55), 90.0, 180.0);
        put_joint(&mut sk, AngleMetric::LeftKnee, (0.70, 0.70), 180.0, 90.0);
        put_joint(&mut sk, AngleMetric::RightKnee, (0.75, 0.75), 180.0, 90.0);
        assert_eq!(score(&sk, "cat"), 100);
    }

    #[test]
    fn test_downward_dog_exact_match() {
        let mut sk = make_skeleton();
        put_joint(&mut sk, AngleMetric::LeftElbow, (0.30, 0.50), 45.0, 180.0);
        put_joint(&mut sk, AngleMetric::RightElbow, (0.35, 0.55), 45.0, 180.0);
        put_joint(&mut sk, AngleMetric::LeftKnee, (0.65, 0.60), 135.0, 180.0);
        put_joint(&mut sk, AngleMetric::RightKnee, (0.70, 0.65), 135.0, 180.0);
        assert_eq!(score(&sk, "downward-dog"), 100);
    }

    #[test]
    fn test_warrior_exact_match() {
        // 肩メトリクスと肘メトリクスがランドマークを共有するため手置きする
        let mut sk = make_skeleton();
        // 左半身: 腕は水平に伸ばし（肘180）、腰は肩の真下（肩90）
        put(&mut sk, LandmarkIndex::LeftHip, 0.30, 0.80);
        put(&mut sk, LandmarkIndex::LeftShoulder, 0.30, 0.50);
        put(&mut sk, LandmarkIndex::LeftElbow, 0.50, 0.50);
        put(&mut sk, LandmarkIndex::LeftWrist, 0.70, 0.50);
        // 右半身: 反対向きに同じ構成
        put(&mut sk, LandmarkIndex::RightHip, 0.70, 0.60);
        put(&mut sk, LandmarkIndex::RightShoulder, 0.70, 0.30);
        put(&mut sk, LandmarkIndex::RightElbow, 0.50, 0.30);
        put(&mut sk, LandmarkIndex::RightWrist, 0.30, 0.30);
        // 左膝90（前脚を曲げる）、右膝180（後脚はまっすぐ）
        put(&mut sk, LandmarkIndex::LeftKnee, 0.30, 0.95);
        put(&mut sk, LandmarkIndex::LeftAnkle, 0.45, 0.95);
        put(&mut sk, LandmarkIndex::RightKnee, 0.70, 0.75);
        put(&mut sk, LandmarkIndex::RightAnkle, 0.70, 0.90);

        let breakdown = score_breakdown(&sk, "warrior");
        assert_eq!(breakdown.len(), 6);
        assert_eq!(score(&sk, "warrior"), 100);
    }

    #[test]
    fn test_deviation_lowers_score() {
        // 両肘を10度ズラす → [90, 90, 100, 100] → 平均95
        let mut sk = tree_skeleton();
        put_joint(&mut sk, AngleMetric::LeftElbow, (0.35, 0.35), -90.0, 50.0);
        put_joint(&mut sk, AngleMetric::RightElbow, (0.65, 0.35), -90.0, -50.0);
        assert_eq!(score(&sk, "tree"), 95);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 平均97.5はちょうど半分 → 98へ丸める
        fn metric(score: f32) -> MetricScore {
            MetricScore {
                metric: AngleMetric::LeftElbow,
                measured: 0.0,
                target: 0.0,
                score,
            }
        }
        let scores = [metric(90.0), metric(100.0), metric(100.0), metric(100.0)];
        assert_eq!(aggregate(&scores), 98);

        let scores = [metric(96.0), metric(97.0)];
        assert_eq!(aggregate(&scores), 97); // 96.5 → 97

        let scores = [metric(96.0), metric(96.0)];
        assert_eq!(aggregate(&scores), 96);
    }

    #[test]
    fn test_per_metric_linear_falloff() {
        // 膝の偏差を0→110度まで増やすと、スコアは1度1点で下がり100度以降は0
        let mut prev = f32::MAX;
        for deviation in [0.0, 10.0, 30.0, 60.0, 99.0, 100.0, 110.0] {
            let mut sk = make_skeleton();
            put_joint(&mut sk, AngleMetric::LeftElbow, (0.30, 0.50), 45.0, 180.0);
            put_joint(&mut sk, AngleMetric::RightElbow, (0.35, 0.55), 45.0, 180.0);
            put_joint(&mut sk, AngleMetric::RightKnee, (0.70, 0.65), 135.0, 180.0);
            put_joint(
                &mut sk,
                AngleMetric::LeftKnee,
                (0.65, 0.60),
                135.0,
                180.0 - deviation,
            );

            let breakdown = score_breakdown(&sk, "downward-dog");
            let knee = breakdown
                .iter()
                .find(|m| m.metric == AngleMetric::LeftKnee)
                .unwrap();

            let expected = (100.0 - deviation).max(0.0);
            assert!(
                (knee.score - expected).abs() < 1e-2,
                "deviation {} → score {}",
                deviation,
                knee.score
            );
            assert!(knee.score <= prev);
            prev = knee.score;
        }
    }

    #[test]
    fn test_score_always_in_range() {
        let skeletons = [
            make_skeleton(),
            tree_skeleton(),
            vec![Landmark::new(1.0, 1.0); LandmarkIndex::COUNT],
            vec![Landmark::new(0.0, 1.0); 40],
        ];
        for sk in &skeletons {
            for id in ["tree", "cat", "warrior", "downward-dog", "unknown"] {
                let s = score(sk, id);
                assert!(s <= 100, "score({}) = {}", id, s);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let sk = tree_skeleton();
        let first = score(&sk, "tree");
        let second = score(&sk, "tree");
        assert_eq!(first, second);

        let b1 = score_breakdown(&sk, "tree");
        let b2 = score_breakdown(&sk, "tree");
        assert_eq!(b1, b2);
    }
}
