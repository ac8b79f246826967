use crate::pose::Landmark;

/// 3点 a-b-c が作る関節角度（度）
///
/// b を頂点として b→c と b→a の2レイの成す角を atan2 の差から求める。
/// 優角（180度超）は補角へ折り返すため、戻り値は常に 0〜180 度。
/// 3点が重なる退化入力では値は無意味（呼び出し側は特定の値に依存しないこと）。
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle
}
